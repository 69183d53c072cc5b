use super::*;

#[test]
fn test_magnitude_and_amplitude() {
    assert_eq!(magnitude(3.0, 4.0), 5.0);
    assert_eq!(amplitude(1, 8, 3.0, -4.0), 10.0);
    assert_eq!(corrected_amplitude(3, 64, 1.5, 0.0, 0.5), 6.0);
}

#[test]
fn test_dc_and_nyquist_are_not_doubled() {
    // A constant offset of 6 lands entirely in bin 0 as 6
    assert_eq!(amplitude(0, 64, 6.0, 0.0), 6.0);
    assert_eq!(corrected_amplitude(0, 64, 3.0, 0.0, 0.5), 6.0);
    // Alternating ±1 lands in bin N/2 as 1
    assert_eq!(amplitude(32, 64, -1.0, 0.0), 1.0);
    // Neighbours of both edges are interior
    assert_eq!(amplitude(31, 64, 1.0, 0.0), 2.0);
    assert_eq!(amplitude(1, 2, 1.0, 0.0), 1.0);
    assert_eq!(amplitude(0, 1, -2.0, 0.0), 2.0);
}

#[test]
fn test_peak_bin() {
    let re = [0.1, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0];
    let im = [0.0, 0.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    assert_eq!(peak_bin(&re, &im), Ok(Some(3)));
}

#[test]
fn test_peak_bin_ignores_mirror_half() {
    // Bin 6 mirrors bin 2 for a real signal; only 0..=N/2 is searched
    let re = [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0];
    let im = [0.0; 8];
    assert_eq!(peak_bin(&re, &im), Ok(Some(2)));
}

#[test]
fn test_peak_bin_edge_cases() {
    assert_eq!(peak_bin(&[], &[]), Ok(None));
    assert_eq!(peak_bin(&[5.0], &[0.0]), Ok(Some(0)));
    assert_eq!(peak_bin(&[1.0, 2.0], &[0.0]), Err(FftError::SizeMismatch));
}
