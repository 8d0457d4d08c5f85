#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Editable mirror of the map's current bounding box.
///
/// The map widget is the source of truth: every pan/zoom overwrites all four
/// fields. The user may edit the fields by hand and the next fetch will use
/// the edited values; the edits survive until the next map move.
///
/// Fields are strings because they mirror text inputs verbatim — numeric
/// conversion happens once, on the way in from the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    pub nw_lat: String,
    pub nw_lon: String,
    pub se_lat: String,
    pub se_lon: String,
}

impl ViewportState {
    /// Build the field values from the map's north-east and south-west
    /// corners.
    ///
    /// The "nw"/"se" naming mixes the corners: `nw_lat` takes the north-east
    /// latitude and `nw_lon` the south-west longitude (and vice versa for
    /// `se_*`), which together still describe the same box. The server's
    /// bounding-box query expects exactly this arrangement.
    pub fn from_bounds(ne_lat: f64, ne_lon: f64, sw_lat: f64, sw_lon: f64) -> Self {
        Self {
            nw_lat: ne_lat.to_string(),
            nw_lon: sw_lon.to_string(),
            se_lat: sw_lat.to_string(),
            se_lon: ne_lon.to_string(),
        }
    }

    /// Serialize the current field values as the messages query string, in
    /// the parameter order the server expects:
    /// `nw_lat`, `nw_lon`, `se_lat`, `se_lon`.
    pub fn messages_query(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("nw_lat", &self.nw_lat);
        query.append_pair("nw_lon", &self.nw_lon);
        query.append_pair("se_lat", &self.se_lat);
        query.append_pair("se_lon", &self.se_lon);
        query.finish()
    }
}
