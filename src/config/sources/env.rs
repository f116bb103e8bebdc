//! Environment source: FLIFF_<SECTION>__<KEY>, e.g. FLIFF_LINE__API_BASE_URL.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("FLIFF")
            .prefix_separator("_")
            .separator("__"),
    )
}
