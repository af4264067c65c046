pub struct RegionCode {}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// The sentinel region code for non-geographical entities, e.g. the
    /// country calling codes for international toll-free services.
    pub fn non_geo_entity() -> &'static str {
        "001"
    }
}
