//! Words With Friends: 15x15, bingo 35.

pub const BINGO_BONUS: u32 = 35;

#[rustfmt::skip]
pub const LETTER_VALUES: [u32; 26] = [
//  A  B  C  D  E  F  G  H  I  J   K  L  M  N  O  P  Q   R  S  T  U  V  W  X  Y  Z
    1, 4, 4, 2, 1, 4, 3, 3, 1, 10, 5, 2, 4, 2, 1, 4, 10, 1, 1, 1, 2, 5, 4, 8, 3, 10,
];

pub const QUARTER_BOARD: [&str; 8] = [
    "-- -- -- 3w -- -- 3l --",
    "-- -- 2l -- -- 2w -- --",
    "-- 2l -- -- 2l -- -- --",
    "3w -- -- 3l -- -- -- 2w",
    "-- -- 2l -- -- 2l -- --",
    "-- 2w -- -- -- 3l -- --",
    "3l -- -- -- 2l -- -- --",
    "-- -- -- 2w -- -- -- ss",
];
