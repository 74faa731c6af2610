//! Periodic terms for the Earth heliocentric series and the nutation series.

/// One `A·cos(B + C·τ)` term of an Earth heliocentric series.
#[derive(Debug, Clone, Copy)]
pub struct EarthTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

const fn t(a: f64, b: f64, c: f64) -> EarthTerm {
    EarthTerm { a, b, c }
}

pub const L0: [EarthTerm; 64] = [
    t(175347046.0, 0.0, 0.0),
    t(3341656.0, 4.6692568, 6283.07585),
    t(34894.0, 4.6261, 12566.1517),
    t(3497.0, 2.7441, 5753.3849),
    t(3418.0, 2.8289, 3.5231),
    t(3136.0, 3.6277, 77713.7715),
    t(2676.0, 4.4181, 7860.4194),
    t(2343.0, 6.1352, 3930.2097),
    t(1324.0, 0.7425, 11506.7698),
    t(1273.0, 2.0371, 529.691),
    t(1199.0, 1.1096, 1577.3435),
    t(990.0, 5.233, 5884.927),
    t(902.0, 2.045, 26.298),
    t(857.0, 3.508, 398.149),
    t(780.0, 1.179, 5223.694),
    t(753.0, 2.533, 5507.553),
    t(505.0, 4.583, 18849.228),
    t(492.0, 4.205, 775.523),
    t(357.0, 2.92, 0.067),
    t(317.0, 5.849, 11790.629),
    t(284.0, 1.899, 796.298),
    t(271.0, 0.315, 10977.079),
    t(243.0, 0.345, 5486.778),
    t(206.0, 4.806, 2544.314),
    t(205.0, 1.869, 5573.143),
    t(202.0, 2.458, 6069.777),
    t(156.0, 0.833, 213.299),
    t(132.0, 3.411, 2942.463),
    t(126.0, 1.083, 20.775),
    t(115.0, 0.645, 0.98),
    t(103.0, 0.636, 4694.003),
    t(102.0, 0.976, 15720.839),
    t(102.0, 4.267, 7.114),
    t(99.0, 6.21, 2146.17),
    t(98.0, 0.68, 155.42),
    t(86.0, 5.98, 161000.69),
    t(85.0, 1.3, 6275.96),
    t(85.0, 3.67, 71430.7),
    t(80.0, 1.81, 17260.15),
    t(79.0, 3.04, 12036.46),
    t(75.0, 1.76, 5088.63),
    t(74.0, 3.5, 3154.69),
    t(74.0, 4.68, 801.82),
    t(70.0, 0.83, 9437.76),
    t(62.0, 3.98, 8827.39),
    t(61.0, 1.82, 7084.9),
    t(57.0, 2.78, 6286.6),
    t(56.0, 4.39, 14143.5),
    t(56.0, 3.47, 6279.55),
    t(52.0, 0.19, 12139.55),
    t(52.0, 1.33, 1748.02),
    t(51.0, 0.28, 5856.48),
    t(49.0, 0.49, 1194.45),
    t(41.0, 5.37, 8429.24),
    t(41.0, 2.4, 19651.05),
    t(39.0, 6.17, 10447.39),
    t(37.0, 6.04, 10213.29),
    t(37.0, 2.57, 1059.38),
    t(36.0, 1.71, 2352.87),
    t(36.0, 1.78, 6812.77),
    t(33.0, 0.59, 17789.85),
    t(30.0, 0.44, 83996.85),
    t(30.0, 2.74, 1349.87),
    t(25.0, 3.16, 4690.48),
];

pub const L1: [EarthTerm; 34] = [
    t(628331966747.0, 0.0, 0.0),
    t(206059.0, 2.678235, 6283.07585),
    t(4303.0, 2.6351, 12566.1517),
    t(425.0, 1.59, 3.523),
    t(119.0, 5.796, 26.298),
    t(109.0, 2.966, 1577.344),
    t(93.0, 2.59, 18849.23),
    t(72.0, 1.14, 529.69),
    t(68.0, 1.87, 398.15),
    t(67.0, 4.41, 5507.55),
    t(59.0, 2.89, 5223.69),
    t(56.0, 2.17, 155.42),
    t(45.0, 0.4, 796.3),
    t(36.0, 0.47, 775.52),
    t(29.0, 2.65, 7.11),
    t(21.0, 5.34, 0.98),
    t(19.0, 1.85, 5486.78),
    t(19.0, 4.97, 213.3),
    t(17.0, 2.99, 6275.96),
    t(16.0, 0.03, 2544.31),
    t(16.0, 1.43, 2146.17),
    t(15.0, 1.21, 10977.08),
    t(12.0, 2.83, 1748.02),
    t(12.0, 3.26, 5088.63),
    t(12.0, 5.27, 1194.45),
    t(12.0, 2.08, 4694.0),
    t(11.0, 0.77, 553.57),
    t(10.0, 1.3, 6286.6),
    t(10.0, 4.24, 1349.87),
    t(9.0, 2.7, 242.73),
    t(9.0, 5.64, 951.72),
    t(8.0, 5.3, 2352.87),
    t(6.0, 2.65, 9437.76),
    t(6.0, 4.67, 4690.48),
];

pub const L2: [EarthTerm; 20] = [
    t(52919.0, 0.0, 0.0),
    t(8720.0, 1.0721, 6283.0758),
    t(309.0, 0.867, 12566.152),
    t(27.0, 0.05, 3.52),
    t(16.0, 5.19, 26.3),
    t(16.0, 3.68, 155.42),
    t(10.0, 0.76, 18849.23),
    t(9.0, 2.06, 77713.77),
    t(7.0, 0.83, 775.52),
    t(5.0, 4.66, 1577.34),
    t(4.0, 1.03, 7.11),
    t(4.0, 3.44, 5573.14),
    t(3.0, 5.14, 796.3),
    t(3.0, 6.05, 5507.55),
    t(3.0, 1.19, 242.73),
    t(3.0, 6.12, 529.69),
    t(3.0, 0.31, 398.15),
    t(3.0, 2.28, 553.57),
    t(2.0, 4.38, 5223.69),
    t(2.0, 3.75, 0.98),
];

pub const L3: [EarthTerm; 7] = [
    t(289.0, 5.844, 6283.076),
    t(35.0, 0.0, 0.0),
    t(17.0, 5.49, 12566.15),
    t(3.0, 5.2, 155.42),
    t(1.0, 4.72, 3.52),
    t(1.0, 5.3, 18849.23),
    t(1.0, 5.97, 242.73),
];

pub const L4: [EarthTerm; 3] = [
    t(114.0, 3.142, 0.0),
    t(8.0, 4.13, 6283.08),
    t(1.0, 3.84, 12566.15),
];

pub const L5: [EarthTerm; 1] = [
    t(1.0, 3.14, 0.0),
];

pub const B0: [EarthTerm; 5] = [
    t(280.0, 3.199, 84334.662),
    t(102.0, 5.422, 5507.553),
    t(80.0, 3.88, 5223.69),
    t(44.0, 3.7, 2352.87),
    t(32.0, 4.0, 1577.34),
];

pub const B1: [EarthTerm; 2] = [
    t(9.0, 3.9, 5507.55),
    t(6.0, 1.73, 5223.69),
];

pub const R0: [EarthTerm; 40] = [
    t(100013989.0, 0.0, 0.0),
    t(1670700.0, 3.0984635, 6283.07585),
    t(13956.0, 3.05525, 12566.1517),
    t(3084.0, 5.1985, 77713.7715),
    t(1628.0, 1.1739, 5753.3849),
    t(1576.0, 2.8469, 7860.4194),
    t(925.0, 5.453, 11506.77),
    t(542.0, 4.564, 3930.21),
    t(472.0, 3.661, 5884.927),
    t(346.0, 0.964, 5507.553),
    t(329.0, 5.9, 5223.694),
    t(307.0, 0.299, 5573.143),
    t(243.0, 4.273, 11790.629),
    t(212.0, 5.847, 1577.344),
    t(186.0, 5.022, 10977.079),
    t(175.0, 3.012, 18849.228),
    t(110.0, 5.055, 5486.778),
    t(98.0, 0.89, 6069.78),
    t(86.0, 5.69, 15720.84),
    t(86.0, 1.27, 161000.69),
    t(65.0, 0.27, 17260.15),
    t(63.0, 0.92, 529.69),
    t(57.0, 2.01, 83996.85),
    t(56.0, 5.24, 71430.7),
    t(49.0, 3.25, 2544.31),
    t(47.0, 2.58, 775.52),
    t(45.0, 5.54, 9437.76),
    t(43.0, 6.01, 6275.96),
    t(39.0, 5.36, 4694.0),
    t(38.0, 2.39, 8827.39),
    t(37.0, 0.83, 19651.05),
    t(37.0, 4.9, 12139.55),
    t(36.0, 1.67, 12036.46),
    t(35.0, 1.84, 2942.46),
    t(33.0, 0.24, 7084.9),
    t(32.0, 0.18, 5088.63),
    t(32.0, 1.78, 398.15),
    t(28.0, 1.21, 6286.6),
    t(28.0, 1.9, 6279.55),
    t(26.0, 4.59, 10447.39),
];

pub const R1: [EarthTerm; 10] = [
    t(103019.0, 1.10749, 6283.07585),
    t(1721.0, 1.0644, 12566.1517),
    t(702.0, 3.142, 0.0),
    t(32.0, 1.02, 18849.23),
    t(31.0, 2.84, 5507.55),
    t(25.0, 1.32, 5223.69),
    t(18.0, 1.42, 1577.34),
    t(10.0, 5.91, 10977.08),
    t(9.0, 1.42, 6275.96),
    t(9.0, 0.27, 5486.78),
];

pub const R2: [EarthTerm; 6] = [
    t(4359.0, 5.7846, 6283.0758),
    t(124.0, 5.579, 12566.152),
    t(12.0, 3.14, 0.0),
    t(9.0, 3.63, 77713.77),
    t(6.0, 1.87, 5573.14),
    t(3.0, 5.47, 18849.23),
];

pub const R3: [EarthTerm; 2] = [
    t(145.0, 4.273, 6283.076),
    t(7.0, 3.92, 12566.15),
];

pub const R4: [EarthTerm; 1] = [
    t(4.0, 2.56, 6283.08),
];

/// Heliocentric longitude series, lowest power of the millennium first.
pub const L_TERMS: [&[EarthTerm]; 6] = [&L0, &L1, &L2, &L3, &L4, &L5];
/// Heliocentric latitude series.
pub const B_TERMS: [&[EarthTerm]; 2] = [&B0, &B1];
/// Earth radius vector series.
pub const R_TERMS: [&[EarthTerm]; 5] = [&R0, &R1, &R2, &R3, &R4];

/// Row of the nutation table: multipliers of (D, M, M′, F, Ω) and the
/// longitude `(a + b·T)·sin` and obliquity `(c + d·T)·cos` coefficients.
#[derive(Debug, Clone, Copy)]
pub struct NutationTerm {
    pub y: [i8; 5],
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

const fn n(y: [i8; 5], a: f64, b: f64, c: f64, d: f64) -> NutationTerm {
    NutationTerm { y, a, b, c, d }
}

pub const NUTATION: [NutationTerm; 63] = [
    n([0, 0, 0, 0, 1], -171996.0, -174.2, 92025.0, 8.9),
    n([-2, 0, 0, 2, 2], -13187.0, -1.6, 5736.0, -3.0),
    n([0, 0, 0, 2, 2], -2274.0, -0.2, 977.0, 0.0),
    n([0, 0, 0, 0, 2], 2062.0, 0.2, -895.0, 0.5),
    n([0, 1, 0, 0, 0], 1426.0, -3.4, 54.0, 0.0),
    n([0, 0, 1, 0, 0], 712.0, 0.1, -7.0, 0.0),
    n([-2, 1, 0, 2, 2], -517.0, 1.2, 224.0, 0.0),
    n([0, 0, 0, 2, 1], -386.0, -0.4, 200.0, 0.0),
    n([0, 0, 1, 2, 2], -301.0, 0.0, 129.0, 0.0),
    n([-2, -1, 0, 2, 2], 217.0, -0.5, -95.0, 0.3),
    n([-2, 0, 1, 0, 0], -158.0, 0.0, 0.0, 0.0),
    n([-2, 0, 0, 2, 1], 129.0, 0.1, -70.0, 0.0),
    n([0, 0, -1, 2, 2], 123.0, 0.0, -53.0, 0.0),
    n([2, 0, 0, 0, 0], 63.0, 0.0, 0.0, 0.0),
    n([0, 0, 1, 0, 1], 63.0, 0.1, -33.0, 0.0),
    n([2, 0, -1, 2, 2], -59.0, 0.0, 26.0, 0.0),
    n([0, 0, -1, 0, 1], -58.0, -0.1, 32.0, 0.0),
    n([0, 0, 1, 2, 1], -51.0, 0.0, 27.0, 0.0),
    n([-2, 0, 2, 0, 0], 48.0, 0.0, 0.0, 0.0),
    n([0, 0, -2, 2, 1], 46.0, 0.0, -24.0, 0.0),
    n([2, 0, 0, 2, 2], -38.0, 0.0, 16.0, 0.0),
    n([0, 0, 2, 2, 2], -31.0, 0.0, 13.0, 0.0),
    n([0, 0, 2, 0, 0], 29.0, 0.0, 0.0, 0.0),
    n([-2, 0, 1, 2, 2], 29.0, 0.0, -12.0, 0.0),
    n([0, 0, 0, 2, 0], 26.0, 0.0, 0.0, 0.0),
    n([-2, 0, 0, 2, 0], -22.0, 0.0, 0.0, 0.0),
    n([0, 0, -1, 2, 1], 21.0, 0.0, -10.0, 0.0),
    n([0, 2, 0, 0, 0], 17.0, -0.1, 0.0, 0.0),
    n([2, 0, -1, 0, 1], 16.0, 0.0, -8.0, 0.0),
    n([-2, 2, 0, 2, 2], -16.0, 0.1, 7.0, 0.0),
    n([0, 1, 0, 0, 1], -15.0, 0.0, 9.0, 0.0),
    n([-2, 0, 1, 0, 1], -13.0, 0.0, 7.0, 0.0),
    n([0, -1, 0, 0, 1], -12.0, 0.0, 6.0, 0.0),
    n([0, 0, 2, -2, 0], 11.0, 0.0, 0.0, 0.0),
    n([2, 0, -1, 2, 1], -10.0, 0.0, 5.0, 0.0),
    n([2, 0, 1, 2, 2], -8.0, 0.0, 3.0, 0.0),
    n([0, 1, 0, 2, 2], 7.0, 0.0, -3.0, 0.0),
    n([-2, 1, 1, 0, 0], -7.0, 0.0, 0.0, 0.0),
    n([0, -1, 0, 2, 2], -7.0, 0.0, 3.0, 0.0),
    n([2, 0, 0, 2, 1], -7.0, 0.0, 3.0, 0.0),
    n([2, 0, 1, 0, 0], 6.0, 0.0, 0.0, 0.0),
    n([-2, 0, 2, 2, 2], 6.0, 0.0, -3.0, 0.0),
    n([-2, 0, 1, 2, 1], 6.0, 0.0, -3.0, 0.0),
    n([2, 0, -2, 0, 1], -6.0, 0.0, 3.0, 0.0),
    n([2, 0, 0, 0, 1], -6.0, 0.0, 3.0, 0.0),
    n([0, -1, 1, 0, 0], 5.0, 0.0, 0.0, 0.0),
    n([-2, -1, 0, 2, 1], -5.0, 0.0, 3.0, 0.0),
    n([-2, 0, 0, 0, 1], -5.0, 0.0, 3.0, 0.0),
    n([0, 0, 2, 2, 1], -5.0, 0.0, 3.0, 0.0),
    n([-2, 0, 2, 0, 1], 4.0, 0.0, 0.0, 0.0),
    n([-2, 1, 0, 2, 1], 4.0, 0.0, 0.0, 0.0),
    n([0, 0, 1, -2, 0], 4.0, 0.0, 0.0, 0.0),
    n([-1, 0, 1, 0, 0], -4.0, 0.0, 0.0, 0.0),
    n([-2, 1, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    n([1, 0, 0, 0, 0], -4.0, 0.0, 0.0, 0.0),
    n([0, 0, 1, 2, 0], 3.0, 0.0, 0.0, 0.0),
    n([0, 0, -2, 2, 2], -3.0, 0.0, 0.0, 0.0),
    n([-1, -1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    n([0, 1, 1, 0, 0], -3.0, 0.0, 0.0, 0.0),
    n([0, -1, 1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    n([2, -1, -1, 2, 2], -3.0, 0.0, 0.0, 0.0),
    n([0, 0, 3, 2, 2], -3.0, 0.0, 0.0, 0.0),
    n([2, -1, 0, 2, 2], -3.0, 0.0, 0.0, 0.0),
];
