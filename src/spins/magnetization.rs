/// Per-state occupation fractions: entry `s` is the fraction of sites
/// holding spin label `s`. Length `q`, entries sum to 1. Pure.
pub fn magnetization(spins: &[u8], q: u8) -> Vec<f64> {
    let mut m = vec![0.0; q as usize];
    magnetization_into(spins, q, &mut m);
    m
}

/// Fill a caller-provided buffer of length `q` with occupation fractions.
///
/// The buffer is zeroed before counting, so labels that never occur come
/// out exactly 0 even when the buffer is reused across measurements.
pub fn magnetization_into(spins: &[u8], q: u8, out: &mut [f64]) {
    assert_eq!(
        out.len(),
        q as usize,
        "magnetization buffer has length {}, expected q = {q}",
        out.len(),
    );

    out.fill(0.0);
    for &s in spins {
        out[s as usize] += 1.0;
    }
    let inv = 1.0 / spins.len() as f64;
    for v in out.iter_mut() {
        *v *= inv;
    }
}
