//! Clausen function Cl₃(θ) = Re(Li₃(e^{iθ}))
//!
//! Structurally mirrors the Cl₂ evaluation: the same angle reduction
//! (without a sign flip, Cl₃ is even) and a two-region rational
//! approximation in z = θ² - π²/8. The θ = 0 singularity is of
//! logarithmic order two, so the low branch corrects with θ²·ln θ/2
//! around the exact value ζ(3).
//!
//! The f64 high-range tables are a much higher-degree fit than their
//! low-range counterpart; they are evaluated through nested blocks in
//! powers z, z², z⁴, z⁸, z¹⁶ to shorten the dependency chains.

use crate::poly::horner;

/// Apéry's constant ζ(3)
const ZETA3: f64 = 1.2020569031595942853997381615114499908;

// ============================================================================
// f64 tier (higher-degree coefficient sets)
// ============================================================================

/// Low-range numerator, θ < π/2
const CL3_LO_P: [f64; 9] = [
    -7.543014859124236086513359303676733979191e-01,
    6.402301836868117230156416581268033099875e-02,
    -2.127896098530218208963041584986434591351e-03,
    3.463165731182357705183279540808782152120e-05,
    -2.754862729116033380287404534774919686497e-07,
    8.052538909862304289974104174276673516832e-10,
    1.346114649676610056675054469405688579693e-12,
    -9.624573206929882592200009480606020302094e-15,
    8.275206821858140239162250779757575466957e-18,
];

/// Low-range denominator, θ < π/2
const CL3_LO_Q: [f64; 9] = [
    1.0,
    -8.951892304715004068142060061380434166813e-02,
    3.220693717342225233144437822487371940443e-03,
    -5.958192714621426181787114562889325229941e-05,
    6.014846196895560469030445734629791881016e-07,
    -3.236076181461994705051496031602571907271e-09,
    8.340438662048507021623726184074556662658e-12,
    -7.892956808623089379250167198187183753861e-15,
    1.129224149808716947279552120998699589829e-18,
];

/// High-range numerator, θ in [π/2, π]
const CL3_HI_P: [f64; 23] = [
    -4.901702464763497295023867883920487195585e-01,
    1.383627100551763417738051599449773818178e+00,
    -1.844002682148364621305380083013461847933e+00,
    1.563880808732850065996446127297492925273e+00,
    -9.527454451278452672142805742734474223237e-01,
    4.444304509117015442253289733308961077770e-01,
    -1.647875030685306314220378800538115071507e-01,
    4.967825071601030726970818647842992410835e-02,
    -1.233860796084952133261104412894436518532e-02,
    2.541279038266908987516674931803683131910e-03,
    -4.345955367166196341753615932772484893528e-04,
    6.151865219319515057283373610462827653393e-05,
    -7.156818018509654192384040775515653410043e-06,
    6.767889054848634496309672687089961659404e-07,
    -5.125309226510821380097226378219650957199e-08,
    3.048859537856972635577813264215347682070e-09,
    -1.389976271585941361238252210621219258086e-10,
    4.704164267289991379740337499442804533393e-12,
    -1.132342670092216676813702977101988168170e-13,
    1.824345098049373687569378456747139377638e-15,
    -1.791641454777807114948357142007867857930e-17,
    9.108765355959209109895175829397816299966e-20,
    -1.660401736402055166724718838052384514483e-22,
];

/// High-range denominator, θ in [π/2, π]
const CL3_HI_Q: [f64; 23] = [
    1.0,
    -2.169855465456334109398757427681231252557e+00,
    2.322591192513290976964726281913672818074e+00,
    -1.625275527588871360012554245669893880287e+00,
    8.307827568524387115453112563337808771609e-01,
    -3.283520342971423622595752570043633453066e-01,
    1.036112385177655663181226022787541960128e-01,
    -2.658049675854302301943410969110308213449e-02,
    5.594232916811019674312451829387056772971e-03,
    -9.682117420514440669170644446720530951119e-04,
    1.373775076479943342597652514135717056402e-04,
    -1.585377827830451443222728940538258932617e-05,
    1.469487119911154060364041910223012615302e-06,
    -1.075235400618754592467376790070172663512e-07,
    6.072406717259994215240055677751661462408e-09,
    -2.571318839166908430254322849495115672150e-10,
    7.860204435599274911316716981969539571217e-12,
    -1.647194263529074575838983448164465153777e-13,
    2.194513208755261829948257460166939183883e-15,
    -1.645669178927884807010050119309005828655e-17,
    5.496854459511181731052565995680338061501e-20,
    -4.060391001681163801807157030538815464753e-23,
    -1.500455700173452211389785169624351996026e-26,
];

/// Nested-block evaluation of the 9-term low-range tables.
// TODO: the fit behind these tables is one term shorter than the high-range
// one; refit with a tenth term to bring both branches to the same order.
fn cl3_poly_lo(z: f64, c: &[f64; 9]) -> f64 {
    let z2 = z * z;
    let z4 = z2 * z2;
    let z8 = z4 * z4;
    c[0] + z * c[1]
        + z2 * (c[2] + z * c[3])
        + z4 * (c[4] + z * c[5] + z2 * (c[6] + z * c[7]))
        + z8 * c[8]
}

/// Nested-block evaluation of the 23-term high-range tables.
fn cl3_poly_hi(z: f64, c: &[f64; 23]) -> f64 {
    let z2 = z * z;
    let z4 = z2 * z2;
    let z8 = z4 * z4;
    let z16 = z8 * z8;
    c[0] + z * c[1]
        + z2 * (c[2] + z * c[3])
        + z4 * (c[4] + z * c[5] + z2 * (c[6] + z * c[7]))
        + z8 * (c[8] + z * c[9]
            + z2 * (c[10] + z * c[11])
            + z4 * (c[12] + z * c[13] + z2 * (c[14] + z * c[15])))
        + z16 * (c[16] + z * c[17]
            + z2 * (c[18] + z * c[19])
            + z4 * (c[20] + z * c[21] + z2 * c[22]))
}

/// Clausen function Cl₃(θ) = Re(Li₃(e^{iθ})).
///
/// # Properties
/// - Cl₃(0) = ζ(3)
/// - Cl₃(-θ) = Cl₃(θ) (even function)
/// - Cl₃(θ + 2π) = Cl₃(θ)
///
/// # Algorithm
/// Same reduction into [0, π] as [`cl2`](crate::cl2), without a sign flip.
/// The low branch forms ζ(3) + θ²·(P/Q + ln θ / 2); the high branch is a
/// plain rational P/Q in (π-θ)² - π²/8.
pub fn cl3(x: f64) -> f64 {
    const PI: f64 = std::f64::consts::PI;
    const PI2: f64 = 2.0 * PI;
    const PIH: f64 = PI / 2.0;
    const PI28: f64 = PI * PI / 8.0;

    let mut x = x.abs();

    if x >= PI2 {
        x %= PI2;
    }

    if x > PI {
        const P0: f64 = 6.28125;
        const P1: f64 = 0.0019353071795864769252867665590057683943;
        x = (P0 - x) + P1;
    }

    if x == 0.0 {
        return ZETA3;
    }

    if x < PIH {
        let y = x * x;
        let z = y - PI28;
        ZETA3 + y * (cl3_poly_lo(z, &CL3_LO_P) / cl3_poly_lo(z, &CL3_LO_Q) + x.ln() / 2.0)
    } else {
        let y = PI - x;
        let z = y * y - PI28;
        cl3_poly_hi(z, &CL3_HI_P) / cl3_poly_hi(z, &CL3_HI_Q)
    }
}

// ============================================================================
// f32 tier (economized low-degree coefficient sets)
// ============================================================================

/// Low-range numerator, θ < π/2
const CL3F_LO_P: [f32; 4] = [
    -7.5430148591242361e-01,
    1.6121940167854339e-02,
    -3.7484056212140535e-05,
    -2.5191292110169198e-07,
];

/// Low-range denominator, θ < π/2
const CL3F_LO_Q: [f32; 4] = [
    1.0,
    -2.6015033560727570e-02,
    1.5460630299236049e-04,
    -1.0987530650923219e-07,
];

/// High-range numerator, θ in [π/2, π]
const CL3F_HI_P: [f32; 6] = [
    -4.9017024647634973e-01,
    4.1559155224660940e-01,
    -7.9425531417806701e-02,
    5.9420152260602943e-03,
    -1.8302227163540190e-04,
    1.8027408929418533e-06,
];

/// High-range denominator, θ in [π/2, π]
const CL3F_HI_Q: [f32; 6] = [
    1.0,
    -1.9495887541644712e-01,
    1.2059410236484074e-02,
    -2.5235889467301620e-04,
    1.0199322763377861e-06,
    1.9612106499469264e-09,
];

/// Clausen function Cl₃(θ) at the f32 precision tier.
///
/// Same reduction and two-region rational approximation as [`cl3`], with
/// the lower-degree coefficient sets; every intermediate value stays in
/// f32.
pub fn cl3f(x: f32) -> f32 {
    const PI: f32 = std::f32::consts::PI;
    const PI2: f32 = 2.0 * PI;
    const PIH: f32 = PI / 2.0;
    const PI28: f32 = PI * PI / 8.0;
    const ZETA3F: f32 = 1.2020569;

    let mut x = x.abs();

    if x >= PI2 {
        x %= PI2;
    }

    if x > PI {
        const P0: f32 = 6.28125;
        const P1: f32 = 0.0019353071795864769253;
        x = (P0 - x) + P1;
    }

    if x == 0.0 {
        return ZETA3F;
    }

    if x < PIH {
        let y = x * x;
        let z = y - PI28;
        ZETA3F + y * (horner(z, &CL3F_LO_P) / horner(z, &CL3F_LO_Q) + x.ln() / 2.0)
    } else {
        let y = PI - x;
        let z = y * y - PI28;
        horner(z, &CL3F_HI_P) / horner(z, &CL3F_HI_Q)
    }
}
