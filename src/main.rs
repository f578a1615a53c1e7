//! XOR and schema demo for the library.
use shallownet::{
    FeatureDefinition, FeatureValue, InputRecord, Matrix, NetConfig, Network, OutputDefinition,
    Schema, TrainingDatum,
};
use tracing::info;

fn main() -> shallownet::Result<()> {
    tracing_subscriber::fmt::init();

    xor()?;
    weather()?;
    Ok(())
}

fn xor() -> shallownet::Result<()> {
    let inputs = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])?;
    let targets = Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])?;

    let mut network = Network::new(NetConfig::new(2, 4, 1, 10_000, 0.5))?;
    info!(config = ?network.config(), "training xor");
    network.train(&inputs, &targets, &mut rand::thread_rng())?;

    let predictions = network.predict(&inputs)?;
    for (input, out) in inputs.data.iter().zip(&predictions.data) {
        info!("xor {:?} -> {:.4}", input, out[0]);
    }
    Ok(())
}

fn weather() -> shallownet::Result<()> {
    let schema = Schema::new(
        vec![
            FeatureDefinition::binary("raining"),
            FeatureDefinition::continuous("temperature", -10.0, 40.0),
            FeatureDefinition::categorical("sky", ["clear", "cloudy", "overcast"]),
        ],
        vec![
            OutputDefinition::probability("go_outside"),
            OutputDefinition::continuous("minutes", 0.0, 120.0),
        ],
    );

    let datum = |raining: bool, temperature: f64, sky: &str, go: f64, minutes: f64| TrainingDatum {
        inputs: [
            ("raining".to_string(), FeatureValue::from(raining)),
            ("temperature".to_string(), temperature.into()),
            ("sky".to_string(), sky.into()),
        ]
        .into_iter()
        .collect(),
        // targets are fed as-is, so continuous ones are given pre-scaled to [0, 1]
        outputs: [
            ("go_outside".to_string(), go),
            ("minutes".to_string(), minutes / 120.0),
        ]
        .into_iter()
        .collect(),
    };
    let data = vec![
        datum(false, 25.0, "clear", 1.0, 90.0),
        datum(false, 18.0, "cloudy", 0.8, 60.0),
        datum(true, 12.0, "overcast", 0.1, 10.0),
        datum(true, 2.0, "cloudy", 0.0, 0.0),
        datum(false, -5.0, "clear", 0.3, 20.0),
    ];

    let (x, y) = schema.encode_dataset(&data)?;
    let config = NetConfig::new(schema.input_width(), 6, schema.output_width(), 5_000, 0.3);
    let mut network = Network::new(config)?;
    network.train(&x, &y, &mut rand::thread_rng())?;

    let query: InputRecord = [
        ("raining".to_string(), FeatureValue::from(false)),
        ("temperature".to_string(), 22.0.into()),
    ]
    .into_iter()
    .collect();
    let decisions = schema.decode(&network.predict(&schema.encode_input(&query)?)?)?;
    info!(?decisions, "weather decision");
    Ok(())
}
