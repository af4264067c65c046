/// Compiled table from country calling code to the region codes sharing it,
/// sorted by calling code. Within a group the main country for the code is
/// always listed first.
///
/// Note regions under NANPA share the country calling code 1 and Russia and
/// Kazakhstan share the country calling code 7; "001" entries denote
/// non-geographical entities.
const COUNTRY_CODE_TO_REGION_CODES: &[(i32, &[&str])] = &[
    (1, &["US", "CA", "BS", "JM", "PR"]),
    (7, &["RU", "KZ"]),
    (33, &["FR"]),
    (34, &["ES"]),
    (39, &["IT", "VA"]),
    (41, &["CH"]),
    (44, &["GB", "GG", "IM", "JE"]),
    (46, &["SE"]),
    (48, &["PL"]),
    (49, &["DE"]),
    (51, &["PE"]),
    (52, &["MX"]),
    (54, &["AR"]),
    (55, &["BR"]),
    (56, &["CL"]),
    (61, &["AU", "CC", "CX"]),
    (62, &["ID"]),
    (64, &["NZ"]),
    (65, &["SG"]),
    (81, &["JP"]),
    (82, &["KR"]),
    (86, &["CN"]),
    (91, &["IN"]),
    (262, &["RE", "YT"]),
    (290, &["SH", "TA"]),
    (358, &["FI", "AX"]),
    (380, &["UA"]),
    (420, &["CZ"]),
    (505, &["NI"]),
    (800, &["001"]),
    (808, &["001"]),
    (971, &["AE"]),
    (972, &["IL"]),
    (979, &["001"]),
];

/// Mapping from country calling code to its ordered list of sharing region
/// codes, main country first. Kept as a sorted vector for binary-search
/// lookup, mirroring the shape of the compiled table.
pub struct CallingCodeRegistry {
    entries: Vec<(i32, Vec<String>)>,
}

impl CallingCodeRegistry {
    /// The registry backing production deployments.
    pub fn compiled() -> Self {
        Self::from_entries(
            COUNTRY_CODE_TO_REGION_CODES
                .iter()
                .map(|(code, regions)| (*code, regions.iter().map(|r| r.to_string()).collect())),
        )
    }

    /// Builds a registry from explicit entries; each region list must carry
    /// the main country for its code first.
    pub fn from_entries(entries: impl IntoIterator<Item = (i32, Vec<String>)>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by_key(|(code, _)| *code);
        Self { entries }
    }

    pub fn contains(&self, calling_code: i32) -> bool {
        self.lookup(calling_code).is_some()
    }

    /// The region codes sharing the calling code, main country first; empty
    /// when the code is unknown.
    pub fn region_codes_for(&self, calling_code: i32) -> &[String] {
        self.lookup(calling_code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn calling_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|(_, regions)| regions.iter().any(|r| r == region_code))
            .map(|(code, _)| *code)
    }

    pub fn supported_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .flat_map(|(_, regions)| regions.iter())
            .map(String::as_str)
            .filter(|region| *region != crate::i18n::RegionCode::non_geo_entity())
    }

    fn lookup(&self, calling_code: i32) -> Option<&Vec<String>> {
        self.entries
            .binary_search_by_key(&calling_code, |(code, _)| *code)
            .ok()
            .map(|index| &self.entries[index].1)
    }
}
