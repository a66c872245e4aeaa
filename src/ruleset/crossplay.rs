//! CrossPlay: 15x15, bingo 40.

pub const BINGO_BONUS: u32 = 40;

#[rustfmt::skip]
pub const LETTER_VALUES: [u32; 26] = [
//  A  B  C  D  E  F  G  H  I  J   K  L  M  N  O  P  Q   R  S  T  U  V  W  X  Y  Z
    1, 4, 3, 2, 1, 4, 4, 3, 1, 10, 6, 2, 3, 1, 1, 3, 10, 1, 1, 1, 2, 6, 5, 8, 4, 10,
];

pub const QUARTER_BOARD: [&str; 8] = [
    "3l -- -- 3w -- -- -- 2l",
    "-- 2w -- -- -- -- 3l --",
    "-- -- -- -- 2l -- -- --",
    "3w -- -- 2l -- -- -- 2w",
    "-- -- 2l -- -- 3l -- --",
    "-- -- -- -- 3l -- -- 2l",
    "-- 3l -- -- -- -- -- --",
    "2l -- -- 2w -- 2l -- ss",
];
