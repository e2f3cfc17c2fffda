use strum::VariantNames;
use tabled::builder::Builder;
use tabled::settings::Style;

use igcinfo_engine::Field;

/// Queryable fields and what they hold.
///
pub fn list_fields() -> String {
    let mut builder = Builder::default();
    builder.push_record(["Name", "Description"]);
    for (name, f) in Field::VARIANTS.iter().zip(Field::ALL) {
        let descr = match f {
            Field::Pilot => "Pilot in charge",
            Field::Glider => "Glider type",
            Field::GliderId => "Glider registration",
            Field::TrackLength => "Path length in km",
            Field::HDate => "Flight date (YYYY-MM-DD)",
        };
        builder.push_record([name.to_string(), descr.to_string()]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    format!("Listing all fields:\n{}", table)
}
