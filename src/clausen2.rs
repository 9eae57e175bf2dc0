//! Clausen function Cl₂(θ) = Im(Li₂(e^{iθ}))
//!
//! Both precision tiers reduce the angle into [0, π] and evaluate a
//! two-region rational (Padé) approximation in z = θ² - π²/8. The f64
//! tier carries the higher-degree coefficient sets of the CERNLIB DCLAUS
//! function C326 lineage, the f32 tier the economized low-degree sets.
//!
//! # References
//! - K. S. Kölbig, Journal of Computational and Applied Mathematics 64
//!   (1995) 295-297

use crate::poly::horner;

// ============================================================================
// f64 tier (higher-degree coefficient sets)
// ============================================================================

/// Low-range numerator, θ < π/2
const CL2_LO_P: [f64; 9] = [
    2.795156582241927046412081735910646612854e-02,
    -2.704528039782130831727668760352473119745e-03,
    1.058576547177802928762582430994046913011e-04,
    -2.147507975446829791077479076828450780219e-06,
    2.401415296681270093111305488326496124531e-08,
    -1.450571790543608936928129678333156785370e-10,
    4.280534901040925211965221454555516657749e-13,
    -4.792802237226483806823208684186867186935e-16,
    8.883657381852830471176782778999368430017e-20,
];

/// Low-range denominator, θ < π/2
const CL2_LO_Q: [f64; 9] = [
    1.0,
    -1.018694323414614410071369720193716012304e-01,
    4.248408782245281612900840467370146443889e-03,
    -9.337710301347963985908084056584187570954e-05,
    1.159379163193822053103946363960603543601e-06,
    -8.083352720393357000801675734774176899515e-09,
    2.949313240431512997069808854213308209519e-11,
    -4.742700419624204182400715964695278593777e-14,
    2.158380636740175386190809152807629331877e-17,
];

/// High-range numerator, θ in [π/2, π)
const CL2_HI_P: [f64; 13] = [
    6.400570244619551220929428522356830562481e-01,
    -4.651631624886004423703445967760673575997e-01,
    1.487130845262105644024901814213146749895e-01,
    -2.749665174801454303884783494225610407035e-02,
    3.251522465413666561950482170352156048203e-03,
    -2.567438381297475310848635518657180974512e-04,
    1.372076105130164861564020074178493529151e-05,
    -4.924179093673498700461153483531075799113e-07,
    1.153267936031337440182387313169828395860e-08,
    -1.667578310677508029208023423625588832295e-10,
    1.348437292247918547169070120217729056878e-12,
    -5.052245092698477071447850656280954693011e-15,
    5.600638109466570497480415519182233229048e-18,
];

/// High-range denominator, θ in [π/2, π)
const CL2_HI_Q: [f64; 13] = [
    1.0,
    -6.572465772185054284667746526549393897676e-01,
    1.886234634096976582977630140163583172173e-01,
    -3.103347567899737687117030083178445406132e-02,
    3.230860399291224478336071920154030050234e-03,
    -2.216546569335921728108984951507368387512e-04,
    1.011949972138985643994631167412420906088e-05,
    -3.033400935206767852937290458763547850384e-07,
    5.748454611964843057644023468691231929690e-09,
    -6.408350048413952604351408631173781906861e-11,
    3.678584366662951864267349037579031493395e-13,
    -8.240439699357036167611014086997683837396e-16,
    3.041049046123062158788159773779755292771e-19,
];

/// Clausen function Cl₂(θ) = Im(Li₂(e^{iθ})).
///
/// ```text
/// Cl₂(θ) = -∫₀^θ ln|2 sin(t/2)| dt
/// ```
///
/// # Properties
/// - Cl₂(0) = Cl₂(π) = 0
/// - Cl₂(-θ) = -Cl₂(θ) (odd function)
/// - Cl₂(θ + 2π) = Cl₂(θ)
/// - Cl₂(π/2) = G (Catalan's constant)
///
/// # Algorithm
/// The angle is reduced into [0, π] by the odd symmetry and periodicity;
/// angles above π reflect through a split 2π = 6.28125 + correction that
/// avoids cancellation. A rational approximation in z = θ² - π²/8
/// (respectively (π-θ)² - π²/8) covers each half of the reduced range;
/// only the low half needs the explicit ln θ of the θ = 0 singularity.
pub fn cl2(x: f64) -> f64 {
    const PI: f64 = std::f64::consts::PI;
    const PI2: f64 = 2.0 * PI;
    const PIH: f64 = PI / 2.0;
    const PI28: f64 = PI * PI / 8.0;

    let mut x = x;
    let mut sgn = 1.0;

    if x < 0.0 {
        x = -x;
        sgn = -1.0;
    }

    if x >= PI2 {
        x %= PI2;
    }

    if x > PI {
        // two-constant split of 2π to limit cancellation in the reflection
        const P0: f64 = 6.28125;
        const P1: f64 = 0.0019353071795864769252867665590057683943;
        x = (P0 - x) + P1;
        sgn = -sgn;
    }

    if x == 0.0 || x == PI {
        return 0.0;
    }

    let h = if x < PIH {
        let y = x * x;
        let z = y - PI28;
        x * (1.0 - x.ln() + y * horner(z, &CL2_LO_P) / horner(z, &CL2_LO_Q) / 2.0)
    } else {
        let y = PI - x;
        let z = y * y - PI28;
        y * horner(z, &CL2_HI_P) / horner(z, &CL2_HI_Q)
    };

    sgn * h
}

// ============================================================================
// f32 tier (economized low-degree coefficient sets)
// ============================================================================

/// Low-range numerator, θ < π/2
const CL2F_LO_P: [f32; 4] = [
    2.7951565822419270e-02,
    -8.8865360514541522e-04,
    6.8282348222485902e-06,
    -7.5276232403566808e-09,
];

/// Low-range denominator, θ < π/2
const CL2F_LO_Q: [f32; 4] = [
    1.0,
    -3.6904397961160525e-02,
    3.7342870576106476e-04,
    -8.7460760866531179e-07,
];

/// High-range numerator, θ in [π/2, π)
const CL2F_HI_P: [f32; 6] = [
    6.4005702446195512e-01,
    -2.0641655351338783e-01,
    2.4175305223497718e-02,
    -1.2355955287855728e-03,
    2.5649833551291124e-05,
    -1.4783829128773320e-07,
];

/// High-range denominator, θ in [π/2, π)
const CL2F_HI_Q: [f32; 6] = [
    1.0,
    -2.5299102015666356e-01,
    2.2148751048467057e-02,
    -7.8183920462457496e-04,
    9.5432542196310670e-06,
    -1.8184302880448247e-08,
];

/// Clausen function Cl₂(θ) at the f32 precision tier.
///
/// Same argument reduction and two-region rational approximation as
/// [`cl2`], with the lower-degree coefficient sets; every intermediate
/// value stays in f32.
pub fn cl2f(x: f32) -> f32 {
    const PI: f32 = std::f32::consts::PI;
    const PI2: f32 = 2.0 * PI;
    const PIH: f32 = PI / 2.0;
    const PI28: f32 = PI * PI / 8.0;

    let mut x = x;
    let mut sgn = 1.0f32;

    if x < 0.0 {
        x = -x;
        sgn = -1.0;
    }

    if x >= PI2 {
        x %= PI2;
    }

    if x > PI {
        const P0: f32 = 6.28125;
        const P1: f32 = 0.0019353071795864769253;
        x = (P0 - x) + P1;
        sgn = -sgn;
    }

    if x == 0.0 || x == PI {
        return 0.0;
    }

    let h = if x < PIH {
        let y = x * x;
        let z = y - PI28;
        x * (1.0 - x.ln() + y * horner(z, &CL2F_LO_P) / horner(z, &CL2F_LO_Q) / 2.0)
    } else {
        let y = PI - x;
        let z = y * y - PI28;
        y * horner(z, &CL2F_HI_P) / horner(z, &CL2F_HI_Q)
    };

    sgn * h
}
