//! Static US state table (50 states plus the District of Columbia).

use super::types::UsState;
use std::collections::HashMap;
use std::sync::OnceLock;

struct StateEntry {
    code: &'static str,
    geonameid: u64,
    name: &'static str,
    fips: &'static str,
}

const US_STATES: &[StateEntry] = &[
    StateEntry { code: "AK", geonameid: 5879092, name: "Alaska", fips: "02" },
    StateEntry { code: "AL", geonameid: 4829764, name: "Alabama", fips: "01" },
    StateEntry { code: "AR", geonameid: 4099753, name: "Arkansas", fips: "05" },
    StateEntry { code: "AZ", geonameid: 5551752, name: "Arizona", fips: "04" },
    StateEntry { code: "CA", geonameid: 5332921, name: "California", fips: "06" },
    StateEntry { code: "CO", geonameid: 5417618, name: "Colorado", fips: "08" },
    StateEntry { code: "CT", geonameid: 4831725, name: "Connecticut", fips: "09" },
    StateEntry { code: "DC", geonameid: 4138106, name: "District of Columbia", fips: "11" },
    StateEntry { code: "DE", geonameid: 4142224, name: "Delaware", fips: "10" },
    StateEntry { code: "FL", geonameid: 4155751, name: "Florida", fips: "12" },
    StateEntry { code: "GA", geonameid: 4197000, name: "Georgia", fips: "13" },
    StateEntry { code: "HI", geonameid: 5855797, name: "Hawaii", fips: "15" },
    StateEntry { code: "IA", geonameid: 4862182, name: "Iowa", fips: "19" },
    StateEntry { code: "ID", geonameid: 5596512, name: "Idaho", fips: "16" },
    StateEntry { code: "IL", geonameid: 4896861, name: "Illinois", fips: "17" },
    StateEntry { code: "IN", geonameid: 4921868, name: "Indiana", fips: "18" },
    StateEntry { code: "KS", geonameid: 4273857, name: "Kansas", fips: "20" },
    StateEntry { code: "KY", geonameid: 6254925, name: "Kentucky", fips: "21" },
    StateEntry { code: "LA", geonameid: 4331987, name: "Louisiana", fips: "22" },
    StateEntry { code: "MA", geonameid: 6254926, name: "Massachusetts", fips: "25" },
    StateEntry { code: "MD", geonameid: 4361885, name: "Maryland", fips: "24" },
    StateEntry { code: "ME", geonameid: 4971068, name: "Maine", fips: "23" },
    StateEntry { code: "MI", geonameid: 5001836, name: "Michigan", fips: "26" },
    StateEntry { code: "MN", geonameid: 5037779, name: "Minnesota", fips: "27" },
    StateEntry { code: "MO", geonameid: 4398678, name: "Missouri", fips: "29" },
    StateEntry { code: "MS", geonameid: 4436296, name: "Mississippi", fips: "28" },
    StateEntry { code: "MT", geonameid: 5667009, name: "Montana", fips: "30" },
    StateEntry { code: "NC", geonameid: 4482348, name: "North Carolina", fips: "37" },
    StateEntry { code: "ND", geonameid: 5690763, name: "North Dakota", fips: "38" },
    StateEntry { code: "NE", geonameid: 5073708, name: "Nebraska", fips: "31" },
    StateEntry { code: "NH", geonameid: 5090174, name: "New Hampshire", fips: "33" },
    StateEntry { code: "NJ", geonameid: 5101760, name: "New Jersey", fips: "34" },
    StateEntry { code: "NM", geonameid: 5481136, name: "New Mexico", fips: "35" },
    StateEntry { code: "NV", geonameid: 5509151, name: "Nevada", fips: "32" },
    StateEntry { code: "NY", geonameid: 5128638, name: "New York", fips: "36" },
    StateEntry { code: "OH", geonameid: 5165418, name: "Ohio", fips: "39" },
    StateEntry { code: "OK", geonameid: 4544379, name: "Oklahoma", fips: "40" },
    StateEntry { code: "OR", geonameid: 5744337, name: "Oregon", fips: "41" },
    StateEntry { code: "PA", geonameid: 6254927, name: "Pennsylvania", fips: "42" },
    StateEntry { code: "RI", geonameid: 5224323, name: "Rhode Island", fips: "44" },
    StateEntry { code: "SC", geonameid: 4597040, name: "South Carolina", fips: "45" },
    StateEntry { code: "SD", geonameid: 5769223, name: "South Dakota", fips: "46" },
    StateEntry { code: "TN", geonameid: 4662168, name: "Tennessee", fips: "47" },
    StateEntry { code: "TX", geonameid: 4736286, name: "Texas", fips: "48" },
    StateEntry { code: "UT", geonameid: 5549030, name: "Utah", fips: "49" },
    StateEntry { code: "VA", geonameid: 6254928, name: "Virginia", fips: "51" },
    StateEntry { code: "VT", geonameid: 5242283, name: "Vermont", fips: "50" },
    StateEntry { code: "WA", geonameid: 5815135, name: "Washington", fips: "53" },
    StateEntry { code: "WI", geonameid: 5279468, name: "Wisconsin", fips: "55" },
    StateEntry { code: "WV", geonameid: 4826850, name: "West Virginia", fips: "54" },
    StateEntry { code: "WY", geonameid: 5843591, name: "Wyoming", fips: "56" },
];

/// The state table keyed by two-letter code, built on first use.
pub fn us_states() -> &'static HashMap<String, UsState> {
    static STATES: OnceLock<HashMap<String, UsState>> = OnceLock::new();
    STATES.get_or_init(|| {
        US_STATES
            .iter()
            .map(|s| {
                let state = UsState {
                    geonameid: s.geonameid,
                    name: s.name.to_string(),
                    code: s.code.to_string(),
                    fips: s.fips.to_string(),
                };
                (s.code.to_string(), state)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_state_count() {
        assert_eq!(us_states().len(), 51);
    }

    #[test]
    fn test_keys_match_codes() {
        for (code, state) in us_states() {
            assert_eq!(code, &state.code);
            assert_eq!(code.len(), 2);
            assert_eq!(state.fips.len(), 2);
        }
    }

    #[test]
    fn test_names_and_fips_unique() {
        let names: HashSet<_> = us_states().values().map(|s| s.name.as_str()).collect();
        let fips: HashSet<_> = us_states().values().map(|s| s.fips.as_str()).collect();
        assert_eq!(names.len(), 51);
        assert_eq!(fips.len(), 51);
    }

    #[test]
    fn test_lookup() {
        let il = &us_states()["IL"];
        assert_eq!(il.name, "Illinois");
        assert_eq!(il.fips, "17");
        assert_eq!(us_states()["DC"].name, "District of Columbia");
    }
}
