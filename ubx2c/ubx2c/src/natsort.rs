//! Natural filename ordering.
//!
//! Continuation pages of one message are numbered (`nav_posllh_1.csv`,
//! `nav_posllh_2.csv`, ... `nav_posllh_10.csv`) and must sort adjacent in
//! numeric order, so digit runs compare as numbers rather than bytewise.

use std::cmp::Ordering;

/// Compare two names treating maximal digit runs as numbers.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (va, ni) = take_number(a, i);
            let (vb, nj) = take_number(b, j);
            match va.cmp(&vb) {
                Ordering::Equal => {
                    i = ni;
                    j = nj;
                }
                other => return other,
            }
        } else {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                other => return other,
            }
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn take_number(s: &[u8], mut i: usize) -> (u128, usize) {
    let mut value = 0u128;
    while i < s.len() && s[i].is_ascii_digit() {
        value = value.saturating_mul(10).saturating_add(u128::from(s[i] - b'0'));
        i += 1;
    }
    (value, i)
}
