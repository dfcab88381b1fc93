//! Correctly rounded havercos values at fixed inputs, one table per band.
//!
//! Each entry is `(x bits, havercos(x) bits)`. Expected values were computed
//! once at 3000-bit precision and rounded to nearest, so these checks do not
//! depend on the host libm.

/// |x| < 256 pi.
pub(crate) const MEDIUM: &[(u64, u64)] = &[
    (0x3fe0000000000000, 0x3fee0a94032dbea8), // 0.5
    (0xbfe0000000000000, 0x3fee0a94032dbea8), // -0.5
    (0x4000000000000000, 0x3fd2aeecd45646fe), // 2.0
    (0xc000000000000000, 0x3fd2aeecd45646fe), // -2.0
    (0x4008000000000000, 0x3f747ed05e868b68), // 3.0
    (0xc008000000000000, 0x3f747ed05e868b68), // -3.0
    (0x4024000000000000, 0x3fb4994ddbce5383), // 10.0
    (0xc024000000000000, 0x3fb4994ddbce5383), // -10.0
    (0x4059000000000000, 0x3fedcc0edfb32ff0), // 100.0
    (0xc059000000000000, 0x3fedcc0edfb32ff0), // -100.0
    (0x4076300000000000, 0x3def38da0c311328), // 355.0
    (0xc076300000000000, 0x3def38da0c311328), // -355.0
    (0x407d99d4f47125c5, 0x3fc1e0389f4f08fc), // 473.6144909305406
    (0xc07d99d4f47125c5, 0x3fc1e0389f4f08fc), // -473.6144909305406
    (0x40883a5f628b6914, 0x3fbc36ea30379228), // 775.2965746776049
    (0xc0883a5f628b6914, 0x3fbc36ea30379228), // -775.2965746776049
    (0x4087f43de0013940, 0x3fefff4e98e6afbd), // 766.5302124114605
    (0xc087f43de0013940, 0x3fefff4e98e6afbd), // -766.5302124114605
    (0x40654e9da7846f59, 0x3feb05fc11a9d3fc), // 170.45674491754724
    (0xc0654e9da7846f59, 0x3feb05fc11a9d3fc), // -170.45674491754724
    (0x407b1b758361673d, 0x3fefc06f5ba41e60), // 433.7161897473159
    (0xc07b1b758361673d, 0x3fefc06f5ba41e60), // -433.7161897473159
    (0x406ad29d1eef0c41, 0x3fe9434d1c9e1a2a), // 214.5816797894386
    (0xc06ad29d1eef0c41, 0x3fe9434d1c9e1a2a), // -214.5816797894386
];

/// 2^20 pi/2 < |x| < 2^60 pi/2, including 1e10.
pub(crate) const LARGE: &[(u64, u64)] = &[
    (0x416312d000000000, 0x3fa7bd20c2b85afb), // 10000000.0
    (0xc16312d000000000, 0x3fa7bd20c2b85afb), // -10000000.0
    (0x419d6f3454000000, 0x3fe23e80ef922b14), // 123456789.0
    (0xc19d6f3454000000, 0x3fe23e80ef922b14), // -123456789.0
    (0x4202a05f20000000, 0x3fedf84c480e498d), // 10000000000.0
    (0xc202a05f20000000, 0x3fedf84c480e498d), // -10000000000.0
    (0x430c6bf526340000, 0x3fcf27d573ec5983), // 1000000000000000.0
    (0xc30c6bf526340000, 0x3fcf27d573ec5983), // -1000000000000000.0
    (0x43abc16d674ec800, 0x3fe1e4da072c075a), // 1e+18
    (0xc3abc16d674ec800, 0x3fe1e4da072c075a), // -1e+18
    (0x4152345c5946f6d1, 0x3fd8f4be41018634), // 4772209.394956307
    (0xc152345c5946f6d1, 0x3fd8f4be41018634), // -4772209.394956307
    (0x4148b99db9cea9d6, 0x3f74d3934c3749ff), // 3240763.451619367
    (0xc148b99db9cea9d6, 0x3f74d3934c3749ff), // -3240763.451619367
    (0x426a48e270b153aa, 0x3fec92948be35209), // 903135593866.6145
    (0xc26a48e270b153aa, 0x3fec92948be35209), // -903135593866.6145
    (0x42550d928e7ee438, 0x3fe86788e236d650), // 361688087035.5659
    (0xc2550d928e7ee438, 0x3fe86788e236d650), // -361688087035.5659
    (0x418628c8142dd61d, 0x3fe0a578184b1e9a), // 46471426.522381045
    (0xc18628c8142dd61d, 0x3fe0a578184b1e9a), // -46471426.522381045
    (0x424739f53aced0e1, 0x3fe36fef9f8c3122), // 199513240989.63187
    (0xc24739f53aced0e1, 0x3fe36fef9f8c3122), // -199513240989.63187
];

/// |x| >= 2^60 pi/2, including 6381956970095103 * 2^797.
pub(crate) const HUGE: &[(u64, u64)] = &[
    (0x43e158e460913d00, 0x3fd400c6dfb5b4e5), // 1e+19
    (0xc3e158e460913d00, 0x3fd400c6dfb5b4e5), // -1e+19
    (0x4480f0cf064dd592, 0x3fe85f167780e47a), // 1e+22
    (0xc480f0cf064dd592, 0x3fe85f167780e47a), // -1e+22
    (0x54b249ad2594c37d, 0x3feecbaba4b420fb), // 1e+100
    (0xd4b249ad2594c37d, 0x3feecbaba4b420fb), // -1e+100
    (0x7e37e43c8800759c, 0x3fcb2cdfbaa4767e), // 1e+300
    (0xfe37e43c8800759c, 0x3fcb2cdfbaa4767e), // -1e+300
    (0x7fefffffffffffff, 0x3ed9d130548ac3f9), // 1.7976931348623157e+308
    (0xffefffffffffffff, 0x3ed9d130548ac3f9), // -1.7976931348623157e+308
    (0x7506ac5b262ca1ff, 0x3fe0000000000000), // 5.319372648326541e+255
    (0xf506ac5b262ca1ff, 0x3fe0000000000000), // -5.319372648326541e+255
    (0x7e70000000000000, 0x3fefcbc28b06440b), // 1.0715086071862673e+301
    (0xfe70000000000000, 0x3fefcbc28b06440b), // -1.0715086071862673e+301
    (0x7366060236e2c01e, 0x3fee19ab114980e3), // 7.69931736081095e+247
    (0xf366060236e2c01e, 0x3fee19ab114980e3), // -7.69931736081095e+247
    (0x46d59492dd106503, 0x3fedc2b13e1a4ad7), // 1.7508072871610298e+33
    (0xc6d59492dd106503, 0x3fedc2b13e1a4ad7), // -1.7508072871610298e+33
    (0x578fedf7feb4c942, 0x3fd3ab77308c110f), // 6.1430123626473434e+113
    (0xd78fedf7feb4c942, 0x3fd3ab77308c110f), // -6.1430123626473434e+113
    (0x6993ea79efc35eb5, 0x3fea9c0ac45671dc), // 3.811163410658064e+200
    (0xe993ea79efc35eb5, 0x3fea9c0ac45671dc), // -3.811163410658064e+200
    (0x466c4f6b97360ed2, 0x3fddb41e13b6cdbd), // 1.794374348250014e+31
    (0xc66c4f6b97360ed2, 0x3fddb41e13b6cdbd), // -1.794374348250014e+31
];
