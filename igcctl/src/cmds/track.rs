//! `track` sub-command.
//!

use eyre::Result;
use serde_json::json;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use igcinfo_engine::{Field, FieldProjection, Repository, TrackParser};

/// Either one field or all of them for track `id`.
///
#[tracing::instrument(skip(repo))]
pub async fn show_track<P: TrackParser>(
    repo: &Repository<P>,
    id: &str,
    field: Option<&str>,
    json: bool,
) -> Result<String> {
    let out = match field {
        Some(name) => {
            let value = repo.query_field(id, name).await?;
            trace!("{name}={value}");
            if json {
                json!({ name: value }).to_string()
            } else {
                value
            }
        }
        None => {
            let p = repo.projection(id).await?;
            if json {
                serde_json::to_string_pretty(&p)?
            } else {
                projection_table(&p)
            }
        }
    };
    Ok(out)
}

/// One row per field.
///
pub fn projection_table(p: &FieldProjection) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for f in Field::ALL {
        builder.push_record([f.to_string(), p.get(f).to_string()]);
    }
    builder.build().with(Style::rounded()).to_string()
}
