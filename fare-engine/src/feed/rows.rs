//! Row models for the two feed tables.
//!
//! Field names mirror the published CSV headers via serde renames. Columns
//! the engine does not use (station codes, Chinese names) are simply not
//! declared and are ignored by the reader.

use serde::Deserialize;

use crate::domain::FareCategory;

/// One record of the fares table: an ordered station pair and the nine
/// published fare cells.
///
/// Fare cells are kept as raw text here. Empty or junk cells are a data
/// condition, not a load failure, so the coercion to an amount happens
/// when the fare table is built.
#[derive(Debug, Clone, Deserialize)]
pub struct FareRow {
    #[serde(rename = "SRC_STATION_ID")]
    pub src_station_id: u32,
    #[serde(rename = "SRC_STATION_NAME")]
    pub src_station_name: String,
    #[serde(rename = "DEST_STATION_ID")]
    pub dest_station_id: u32,
    #[serde(rename = "DEST_STATION_NAME")]
    pub dest_station_name: String,
    #[serde(rename = "OCT_ADT_FARE")]
    pub oct_adt_fare: String,
    #[serde(rename = "OCT_STD_FARE")]
    pub oct_std_fare: String,
    #[serde(rename = "OCT_JOYYOU_SIXTY_FARE")]
    pub oct_joyyou_sixty_fare: String,
    #[serde(rename = "SINGLE_ADT_FARE")]
    pub single_adt_fare: String,
    #[serde(rename = "OCT_CON_CHILD_FARE")]
    pub oct_con_child_fare: String,
    #[serde(rename = "OCT_CON_ELDERLY_FARE")]
    pub oct_con_elderly_fare: String,
    #[serde(rename = "OCT_CON_PWD_FARE")]
    pub oct_con_pwd_fare: String,
    #[serde(rename = "SINGLE_CON_CHILD_FARE")]
    pub single_con_child_fare: String,
    #[serde(rename = "SINGLE_CON_ELDERLY_FARE")]
    pub single_con_elderly_fare: String,
}

impl FareRow {
    /// The raw cell text for one category's column.
    pub fn cell(&self, category: FareCategory) -> &str {
        match category {
            FareCategory::OctopusAdult => &self.oct_adt_fare,
            FareCategory::OctopusStudent => &self.oct_std_fare,
            FareCategory::OctopusJoyYou => &self.oct_joyyou_sixty_fare,
            FareCategory::SingleAdult => &self.single_adt_fare,
            FareCategory::OctopusChild => &self.oct_con_child_fare,
            FareCategory::OctopusElderly => &self.oct_con_elderly_fare,
            FareCategory::OctopusPwd => &self.oct_con_pwd_fare,
            FareCategory::SingleChild => &self.single_con_child_fare,
            FareCategory::SingleElderly => &self.single_con_elderly_fare,
        }
    }
}

/// One record of the lines-and-stations table: a station's place on one
/// direction of one line.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRow {
    #[serde(rename = "Line Code")]
    pub line_code: String,
    /// Direction code ("DT", "UT", or a branch-qualified form such as
    /// "LMC-DT").
    #[serde(rename = "Direction")]
    pub direction: String,
    #[serde(rename = "English Name")]
    pub english_name: String,
    /// Position along the direction. The feed publishes these as decimals
    /// ("1.00"); only the ordering matters.
    #[serde(rename = "Sequence")]
    pub sequence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> FareRow {
        FareRow {
            src_station_id: 1,
            src_station_name: "Admiralty".to_owned(),
            dest_station_id: 2,
            dest_station_name: "Sha Tin".to_owned(),
            oct_adt_fare: "10.3".to_owned(),
            oct_std_fare: "5.2".to_owned(),
            oct_joyyou_sixty_fare: "2".to_owned(),
            single_adt_fare: "11.5".to_owned(),
            oct_con_child_fare: "4.6".to_owned(),
            oct_con_elderly_fare: "2".to_owned(),
            oct_con_pwd_fare: "2".to_owned(),
            single_con_child_fare: "5.5".to_owned(),
            single_con_elderly_fare: "5.5".to_owned(),
        }
    }

    #[test]
    fn cell_selects_the_matching_column() {
        let row = sample_row();
        assert_eq!(row.cell(FareCategory::OctopusAdult), "10.3");
        assert_eq!(row.cell(FareCategory::OctopusStudent), "5.2");
        assert_eq!(row.cell(FareCategory::SingleAdult), "11.5");
        assert_eq!(row.cell(FareCategory::SingleElderly), "5.5");
    }

    #[test]
    fn every_category_has_a_cell() {
        let row = sample_row();
        for category in FareCategory::ALL {
            assert!(!row.cell(category).is_empty());
        }
    }
}
