use crate::cli::CoordsArgs;
use crate::output::OutputWriter;
use crate::output_types::CoordsOutput;
use anyhow::Result;
use remoview_core::media::map_url;
use remoview_core::models::Coordinates;

pub fn execute(args: CoordsArgs, output: &OutputWriter) -> Result<()> {
    let samples: Vec<CoordsOutput> = (0..args.count)
        .map(|_| {
            let coordinates = Coordinates::random();
            CoordsOutput {
                coordinates,
                formatted: coordinates.to_string(),
                map_url: map_url(&coordinates),
            }
        })
        .collect();

    if output.is_json() {
        return output.result(&samples);
    }

    for sample in &samples {
        output.kv("Coordinates", &sample.formatted);
        output.kv("Map", &sample.map_url);
    }

    Ok(())
}
