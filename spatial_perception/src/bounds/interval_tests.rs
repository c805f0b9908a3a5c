use super::*;

#[test]
fn test_new_reorders_bounds() {
    let i = Interval::new(5.0, -1.0);
    assert_eq!(i.min, -1.0);
    assert_eq!(i.max, 5.0);
    assert_eq!(i.length(), 6.0);
}

#[test]
fn test_containment_and_overlap() {
    let big = Interval::new(0.0, 10.0);
    let small = Interval::new(2.0, 3.0);
    let straddling = Interval::new(8.0, 12.0);
    let apart = Interval::new(20.0, 21.0);

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
    assert!(big.intersects(&straddling));
    assert!(!big.intersects(&apart));
    assert!(big.contains_point(10.0));
    assert!(!big.contains_point(10.5));
}

#[test]
fn test_orthant_split() {
    let i = Interval::new(0.0, 10.0);
    assert_eq!(Interval::orthant(4.0, 3.9), 0);
    assert_eq!(Interval::orthant(4.0, 4.0), 1);
    assert_eq!(i.orthant_bounds(4.0, 0), Interval::new(0.0, 4.0));
    assert_eq!(i.orthant_bounds(4.0, 1), Interval::new(4.0, 10.0));
    // Reference outside the interval is clamped
    assert_eq!(i.orthant_bounds(40.0, 0), Interval::new(0.0, 10.0));
}

#[test]
fn test_validity_and_degeneracy() {
    assert!(Interval::new(1.0, 2.0).is_valid());
    assert!(!Interval { min: 2.0, max: 1.0 }.is_valid());
    assert!(!Interval::new(f32::NAN, 1.0).is_valid());
    assert!(!Interval::new(1.0, f32::NAN).is_valid());
    assert!(Interval::from_point(3.0).is_degenerate());
    assert_eq!(Interval::from_point(3.0).center(), 3.0);
    assert_eq!(Interval::new(0.0, 1.0).dimension(), Dimension::One);
}
