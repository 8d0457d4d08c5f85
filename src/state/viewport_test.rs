use super::*;

// =============================================================
// ViewportState::from_bounds
// =============================================================

#[test]
fn from_bounds_mixes_corners() {
    let v = ViewportState::from_bounds(51.52, -0.05, 51.49, -0.13);

    assert_eq!(v.nw_lat, "51.52");
    assert_eq!(v.nw_lon, "-0.13");
    assert_eq!(v.se_lat, "51.49");
    assert_eq!(v.se_lon, "-0.05");
}

#[test]
fn from_bounds_uses_default_float_formatting() {
    let v = ViewportState::from_bounds(51.505, -0.09, 0.0, 180.0);

    assert_eq!(v.nw_lat, "51.505");
    assert_eq!(v.nw_lon, "180");
    assert_eq!(v.se_lat, "0");
    assert_eq!(v.se_lon, "-0.09");
}

// =============================================================
// ViewportState::messages_query
// =============================================================

#[test]
fn messages_query_uses_fixed_parameter_order() {
    let v = ViewportState::from_bounds(51.52, -0.05, 51.49, -0.13);

    assert_eq!(
        v.messages_query(),
        "nw_lat=51.52&nw_lon=-0.13&se_lat=51.49&se_lon=-0.05"
    );
}

#[test]
fn messages_query_reads_fields_not_bounds() {
    let mut v = ViewportState::from_bounds(51.52, -0.05, 51.49, -0.13);
    v.se_lat = "40".to_owned();

    assert_eq!(
        v.messages_query(),
        "nw_lat=51.52&nw_lon=-0.13&se_lat=40&se_lon=-0.05"
    );
}

#[test]
fn messages_query_encodes_manual_edits() {
    let v = ViewportState {
        nw_lat: "not a number".to_owned(),
        ..ViewportState::default()
    };

    assert_eq!(v.messages_query(), "nw_lat=not+a+number&nw_lon=&se_lat=&se_lon=");
}

#[test]
fn default_state_has_empty_fields() {
    let v = ViewportState::default();
    assert!(v.nw_lat.is_empty());
    assert!(v.nw_lon.is_empty());
    assert!(v.se_lat.is_empty());
    assert!(v.se_lon.is_empty());
}
