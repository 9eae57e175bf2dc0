//! Dirichlet eta function η(n) at integer arguments
//!
//! Pure table lookup: η vanishes at the negative even integers, the
//! values at negative odd integers grow super-exponentially with
//! alternating sign, and the values at positive integers approach -1
//! (this crate's tables carry η of the *negated* series, i.e.
//! Li_n(-1) = -η(n)). Outside the precomputed negative-odd range the
//! magnitude is not representable in f64 and the result saturates to
//! signed infinity by the parity rule.

/// η at positive integers, Li_n(-1) for n = 1..=54
const NEG_ETA: [f64; 54] = [
    -0.6931471805599453, -0.8224670334241132, -0.9015426773696957,
    -0.9470328294972459, -0.9721197704469093, -0.9855510912974351,
    -0.9925938199228302, -0.9962330018526478, -0.9980942975416053,
    -0.9990395075982715, -0.9995171434980608, -0.9997576851438582,
    -0.9998785427632652, -0.9999391703459797, -0.9999695512130993,
    -0.9999847642149061, -0.999992378292041, -0.9999961878696101,
    -0.9999980935081717, -0.9999990466115816, -0.9999995232582155,
    -0.9999997616132308, -0.9999998808013184, -0.9999999403988924,
    -0.999999970198857, -0.999999985099232, -0.9999999925495505,
    -0.9999999962747534, -0.9999999981373694, -0.9999999990686823,
    -0.9999999995343403, -0.9999999997671699, -0.9999999998835849,
    -0.9999999999417925, -0.9999999999708962, -0.9999999999854481,
    -0.999999999992724, -0.999999999996362, -0.999999999998181,
    -0.9999999999990905, -0.9999999999995453, -0.9999999999997726,
    -0.9999999999998863, -0.9999999999999432, -0.9999999999999716,
    -0.9999999999999858, -0.9999999999999929, -0.9999999999999964,
    -0.9999999999999982, -0.9999999999999991, -0.9999999999999996,
    -0.9999999999999998, -0.9999999999999999, -0.9999999999999999,
];

/// η at negative odd integers, Li_(-2n+1)(-1) for n = 1..=109
const NEG_ETA_NEG_N: [f64; 109] = [
    -0.25, 0.125, -0.25,
    1.0625, -7.75, 86.375,
    -1365.25, 29049.03125, -800572.75,
    27741322.625, -1180529130.25, 60523980051.6875,
    -3679416778537.75, 261707609906583.88, -2.1531418140800296e+16,
    2.0288775575173015e+18, -2.1708009902623772e+20, 2.6173826968455817e+22,
    -3.532414887686388e+24, 5.3042033406864905e+26, -8.813821836431158e+28,
    1.6128065107490778e+31, -3.2355470001722734e+33, 7.087672747653749e+35,
    -1.6890450341293965e+38, 4.363969073121683e+40, -1.218599882706126e+43,
    3.667058480315301e+45, -1.18598985263021e+48, 4.1120769493584016e+50,
    -1.524904243678762e+53, 6.034969319694131e+55, -2.54371617642107e+58,
    1.1396923802632288e+61, -5.418086106475398e+63, 2.7283654799994376e+66,
    -1.4529750514918542e+69, 8.170551937106745e+71, -4.844578160667836e+74,
    3.024669420664952e+77, -1.9858807961690494e+80, 1.3694474620720087e+83,
    -9.907038298429581e+85, 7.510378079659264e+88, -5.959841826426088e+91,
    4.945598888750002e+94, -4.287359692702024e+97, 3.879195203771616e+100,
    -3.660031777315634e+103, 3.5978775704117282e+106, -3.6818662617467815e+109,
    3.919274306642138e+112, -4.336392188506386e+115, 4.983316271178084e+118,
    -5.943865302020961e+121, 7.353343901977014e+124, -9.429346571697355e+127,
    1.2525196404154547e+131, -1.72237871639944e+134, 2.4505178680729537e+137,
    -3.6051616659014187e+140, 5.481380383649977e+143, -8.608389201212261e+146,
    1.395713935429816e+150, -2.335050886059163e+153, 4.029129737479486e+156,
    -7.166994622741154e+159, 1.3136385964069363e+163, -2.4799083462304253e+166,
    4.819808369638556e+169, -9.640003119695827e+172, 1.9833611905147645e+176,
    -4.1959717912682864e+179, 9.124372459575e+182, -2.0386902382464213e+186,
    4.678640806635038e+189, -1.1024400389046487e+193, 2.666291642423826e+196,
    -6.616558501477176e+199, 1.684172697497003e+203, -4.395747481300695e+206,
    1.176076601189957e+210, -3.224509467136048e+213, 9.05708555431858e+216,
    -2.6054618058433055e+220, 7.674144942172656e+223, -2.313688042796175e+227,
    7.138259857240824e+230, -2.2530900128907082e+234, 7.273640469601816e+237,
    -2.401060841642964e+241, 8.102627941494179e+244, -2.794574573809857e+248,
    9.84850951224812e+251, -3.5456055356238576e+255, 1.3036999220919922e+259,
    -4.894816686645378e+262, 1.8761736309852137e+266, -7.339991887780749e+269,
    2.930313603353904e+273, -1.193549427794947e+277, 4.958931062197137e+280,
    -2.1012240064879844e+284, 9.078417983477736e+287, -3.9987113012775243e+291,
    1.795238092218271e+295, -8.213679900205584e+298, 3.829043159690848e+302,
    -1.8184610414701105e+306,
];

const fn is_even(n: i64) -> bool {
    n % 2 == 0
}

/// Negative Dirichlet eta function, -η(n) = Li_n(-1).
///
/// Defined for every `i64`; used for n ≤ 0 but tolerant of n > 0.
///
/// # Policy
/// - n < 0 even: exactly 0
/// - n < 0 odd, index -(1+n)/2 inside the table: direct lookup
/// - n < 0 odd, beyond the table: ±∞ by the parity of (1-n)/2 — the true
///   magnitude is not representable, saturation is deliberate
/// - n = 0: exactly -0.5
/// - 0 < n ≤ 54: direct lookup
/// - n > 54: -1.0 (the series saturates within f64)
pub fn neg_eta(n: i64) -> f64 {
    if n < 0 {
        if is_even(n) {
            return 0.0;
        }
        // (1-n)/2 = k+1, so the parity rule reads off the table index
        let k = -(1 + n) / 2;
        if (k as usize) < NEG_ETA_NEG_N.len() {
            NEG_ETA_NEG_N[k as usize]
        } else if is_even(k) {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if n == 0 {
        -0.5
    } else if n <= NEG_ETA.len() as i64 {
        NEG_ETA[(n - 1) as usize]
    } else {
        -1.0
    }
}
