use super::*;
use std::string::String;
use std::vec;

#[test]
fn test_write_log_layout() {
    let records = [
        LogRecord {
            index: 0,
            windowed: Complex64::new(0.0, 0.0),
            spectrum: Complex64::new(1.5, -0.25),
            reconstructed: Complex64::new(0.0, 0.0),
            weight: 0.0,
        },
        LogRecord {
            index: 1,
            windowed: Complex64::new(2.0, 0.0),
            spectrum: Complex64::new(-0.125, 3.0),
            reconstructed: Complex64::new(2.0, 1e-9),
            weight: 0.5,
        },
    ];

    let mut out = vec![];
    write_log(&mut out, &records).unwrap();

    let text = String::from_utf8(out).unwrap();
    let expected = "\
0,0.000000,0.000000,,0,1.500000,-0.250000,,0,0.000000,0.000000,,0,0.000000
1,2.000000,0.000000,,1,-0.125000,3.000000,,1,2.000000,0.000000,,1,0.500000
";
    assert_eq!(text, expected);
}

#[test]
fn test_records_zips_stages() {
    let xw = [1.0, 2.0];
    let yw = [0.0, 0.0];
    let xf = [1.5, -0.5];
    let yf = [0.0, 0.0];
    let w = [1.0, 1.0];

    let recs = records((&xw, &yw), (&xf, &yf), (&xw, &yw), &w).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[1].index, 1);
    assert_eq!(recs[1].windowed, Complex64::new(2.0, 0.0));
    assert_eq!(recs[1].spectrum, Complex64::new(-0.5, 0.0));
    assert_eq!(recs[1].weight, 1.0);
}

#[test]
fn test_records_rejects_ragged_input() {
    let a = [1.0, 2.0];
    let short = [0.0];
    assert_eq!(
        records((&a, &a), (&a, &short), (&a, &a), &a),
        Err(FftError::SizeMismatch)
    );
}
