use std::collections::HashMap;

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::{error::{Error, Result}, math::matrix::Matrix};
use crate::schema::feature::{FeatureDefinition, FeatureKind, OutputDefinition};
use crate::schema::value::{FeatureValue, InputRecord, OutputRecord, TrainingDatum};

/// Maps typed records to the numeric rows a `Network` consumes, and network
/// outputs back to named values.
///
/// Column order follows declaration order of `inputs` and `outputs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub inputs: Vec<FeatureDefinition>,
    pub outputs: Vec<OutputDefinition>,
}

impl Schema {
    pub fn new(inputs: Vec<FeatureDefinition>, outputs: Vec<OutputDefinition>) -> Schema {
        Schema { inputs, outputs }
    }

    pub fn from_json(json: &str) -> Result<Schema> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn input_width(&self) -> usize {
        self.inputs.iter().map(|d| d.kind.input_width()).sum()
    }

    pub fn output_width(&self) -> usize {
        self.outputs.len()
    }

    /// Encodes one record into a `(1 × input_width)` row.
    ///
    /// Missing or `Null` values fall back to: Binary → 0, Continuous → the
    /// range midpoint, Categorical → the first category.
    pub fn encode_input(&self, record: &InputRecord) -> Result<Matrix> {
        let mut features = Vec::with_capacity(self.input_width());

        for def in &self.inputs {
            match record.get(&def.name) {
                None | Some(FeatureValue::Null) => push_default(&def.kind, &mut features),
                Some(value) => push_value(def, value, &mut features)?,
            }
        }

        Ok(Matrix::row_vector(features))
    }

    /// Encodes one target record into a `(1 × output_width)` row. Missing
    /// keys become 0.0; values are not validated or rescaled.
    pub fn encode_output(&self, record: &OutputRecord) -> Matrix {
        Matrix::row_vector(
            self.outputs
                .iter()
                .map(|def| record.get(&def.name).copied().unwrap_or(0.0))
                .collect(),
        )
    }

    /// Encodes a whole dataset into `(n × input_width, n × output_width)`.
    pub fn encode_dataset(&self, data: &[TrainingDatum]) -> Result<(Matrix, Matrix)> {
        if data.is_empty() {
            return Err(Error::InvalidData("dataset is empty".to_string()));
        }

        let mut xs = Vec::with_capacity(data.len());
        let mut ys = Vec::with_capacity(data.len());
        for datum in data {
            xs.push(self.encode_input(&datum.inputs)?);
            ys.push(self.encode_output(&datum.outputs));
        }

        Ok((Matrix::vstack(&xs)?, Matrix::vstack(&ys)?))
    }

    /// Reads row 0 of `output` and maps each output column back to its value.
    ///
    /// Probability passes through, Continuous is denormalised with the
    /// definition's range. Binary and Categorical outputs have no decoding
    /// and are left out of the result.
    pub fn decode(&self, output: &Matrix) -> Result<HashMap<String, f64>> {
        if output.rows == 0 || output.cols < self.outputs.len() {
            return Err(Error::ShapeMismatch {
                op: "decode",
                left: output.shape(),
                right: (1, self.outputs.len()),
            });
        }

        let row = &output.data[0];
        let mut decisions = HashMap::with_capacity(self.outputs.len());

        for (def, &value) in self.outputs.iter().zip(row) {
            match &def.kind {
                FeatureKind::Probability => {
                    decisions.insert(def.name.clone(), value);
                }
                FeatureKind::Continuous { min, max } => {
                    decisions.insert(def.name.clone(), value * (max - min) + min);
                }
                other => {
                    debug!(
                        output = %def.name,
                        kind = other.name(),
                        "no decoding for output kind, skipped"
                    );
                }
            }
        }

        Ok(decisions)
    }
}

fn push_default(kind: &FeatureKind, features: &mut Vec<f64>) {
    match kind {
        FeatureKind::Binary => features.push(0.0),
        FeatureKind::Continuous { min, max } => features.push((min + max) / 2.0),
        FeatureKind::Categorical { categories } => {
            features.extend((0..categories.len()).map(|i| if i == 0 { 1.0 } else { 0.0 }));
        }
        FeatureKind::Probability => {}
    }
}

fn push_value(
    def: &FeatureDefinition,
    value: &FeatureValue,
    features: &mut Vec<f64>,
) -> Result<()> {
    match (&def.kind, value) {
        (FeatureKind::Binary, FeatureValue::Bool(b)) => {
            features.push(if *b { 1.0 } else { 0.0 });
        }
        // min == max divides by zero; ranges are the caller's responsibility.
        (FeatureKind::Continuous { min, max }, FeatureValue::Number(raw)) => {
            features.push((raw - min) / (max - min));
        }
        (FeatureKind::Categorical { categories }, FeatureValue::Text(label)) => {
            features.extend(categories.iter().map(|c| if c == label { 1.0 } else { 0.0 }));
        }
        (FeatureKind::Probability, _) => {}
        (kind, value) => {
            return Err(Error::TypeMismatch {
                feature: def.name.clone(),
                expected: expected_value(kind),
                found: value.kind_name(),
            });
        }
    }
    Ok(())
}

fn expected_value(kind: &FeatureKind) -> &'static str {
    match kind {
        FeatureKind::Binary => "bool",
        FeatureKind::Continuous { .. } | FeatureKind::Probability => "number",
        FeatureKind::Categorical { .. } => "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(pairs: Vec<(&str, FeatureValue)>) -> InputRecord {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn colour_schema() -> Schema {
        Schema::new(
            vec![FeatureDefinition::categorical("colour", ["a", "b", "c"])],
            vec![],
        )
    }

    #[test]
    fn widths_follow_definitions() {
        let schema = Schema::new(
            vec![
                FeatureDefinition::binary("flag"),
                FeatureDefinition::continuous("size", 0.0, 10.0),
                FeatureDefinition::categorical("colour", ["a", "b", "c"]),
                FeatureDefinition::probability("p"),
            ],
            vec![OutputDefinition::probability("x"), OutputDefinition::continuous("y", 0.0, 1.0)],
        );
        assert_eq!(schema.input_width(), 5);
        assert_eq!(schema.output_width(), 2);

        let row = schema.encode_input(&InputRecord::new()).unwrap();
        assert_eq!(row.shape(), (1, 5));
    }

    #[test]
    fn continuous_normalises_and_defaults_to_midpoint() {
        let schema = Schema::new(vec![FeatureDefinition::continuous("size", 0.0, 10.0)], vec![]);
        let encoded = schema.encode_input(&record(vec![("size", 5.0.into())])).unwrap();
        assert_eq!(encoded.data, vec![vec![0.5]]);

        let schema = Schema::new(vec![FeatureDefinition::continuous("size", 2.0, 6.0)], vec![]);
        let missing = schema.encode_input(&InputRecord::new()).unwrap();
        assert_eq!(missing.data, vec![vec![4.0]]);
    }

    #[test]
    fn categorical_one_hot() {
        let schema = colour_schema();
        let b = schema.encode_input(&record(vec![("colour", "b".into())])).unwrap();
        assert_eq!(b.data, vec![vec![0.0, 1.0, 0.0]]);

        let missing = schema.encode_input(&InputRecord::new()).unwrap();
        assert_eq!(missing.data, vec![vec![1.0, 0.0, 0.0]]);

        let null = schema.encode_input(&record(vec![("colour", FeatureValue::Null)])).unwrap();
        assert_eq!(null.data, vec![vec![1.0, 0.0, 0.0]]);

        let unknown = schema.encode_input(&record(vec![("colour", "z".into())])).unwrap();
        assert_eq!(unknown.data, vec![vec![0.0, 0.0, 0.0]]);
    }

    #[test]
    fn binary_values_and_default() {
        let schema = Schema::new(vec![FeatureDefinition::binary("flag")], vec![]);
        assert_eq!(schema.encode_input(&InputRecord::new()).unwrap().data, vec![vec![0.0]]);
        assert_eq!(
            schema.encode_input(&record(vec![("flag", true.into())])).unwrap().data,
            vec![vec![1.0]]
        );
        assert_eq!(
            schema.encode_input(&record(vec![("flag", false.into())])).unwrap().data,
            vec![vec![0.0]]
        );
    }

    #[test]
    fn mismatched_value_kind_is_a_type_error() {
        let schema = Schema::new(vec![FeatureDefinition::continuous("size", 0.0, 10.0)], vec![]);
        match schema.encode_input(&record(vec![("size", "big".into())])) {
            Err(Error::TypeMismatch { feature, expected, found }) => {
                assert_eq!(feature, "size");
                assert_eq!(expected, "number");
                assert_eq!(found, "text");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }

        let schema = Schema::new(vec![FeatureDefinition::binary("flag")], vec![]);
        assert!(schema.encode_input(&record(vec![("flag", 1.0.into())])).is_err());
        assert!(colour_schema().encode_input(&record(vec![("colour", true.into())])).is_err());
    }

    #[test]
    fn probability_inputs_take_no_columns() {
        let schema = Schema::new(
            vec![FeatureDefinition::binary("a"), FeatureDefinition::probability("p")],
            vec![],
        );
        let rec = record(vec![("a", true.into()), ("p", 0.3.into())]);
        let row = schema.encode_input(&rec).unwrap();
        assert_eq!(row.data, vec![vec![1.0]]);
    }

    #[test]
    fn encode_output_is_positional_with_zero_default() {
        let schema = Schema::new(
            vec![],
            vec![OutputDefinition::probability("p"), OutputDefinition::continuous("c", 0.0, 10.0)],
        );
        let out: OutputRecord = [("c".to_string(), 7.5)].into_iter().collect();
        assert_eq!(schema.encode_output(&out).data, vec![vec![0.0, 7.5]]);
    }

    #[test]
    fn decode_denormalises_and_skips_unhandled_kinds() {
        let schema = Schema::new(
            vec![],
            vec![
                OutputDefinition::continuous("size", 0.0, 10.0),
                OutputDefinition::probability("p"),
                OutputDefinition::new("flag", FeatureKind::Binary),
            ],
        );
        let m = Matrix::from_data(vec![vec![0.5, 0.8, 1.0], vec![0.0, 0.0, 0.0]]).unwrap();
        let decoded = schema.decode(&m).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["size"], 5.0);
        assert_eq!(decoded["p"], 0.8);
        assert!(!decoded.contains_key("flag"));
    }

    #[test]
    fn decode_rejects_short_matrix() {
        let schema = Schema::new(vec![], vec![OutputDefinition::probability("p")]);
        assert!(schema.decode(&Matrix::zeros(0, 1)).is_err());
        assert!(schema.decode(&Matrix::zeros(1, 0)).is_err());
    }

    #[test]
    fn encode_dataset_stacks_rows() {
        let schema = Schema::new(
            vec![FeatureDefinition::binary("a")],
            vec![OutputDefinition::probability("y")],
        );
        let data = vec![
            TrainingDatum {
                inputs: record(vec![("a", true.into())]),
                outputs: [("y".to_string(), 1.0)].into_iter().collect(),
            },
            TrainingDatum::default(),
        ];
        let (x, y) = schema.encode_dataset(&data).unwrap();
        assert_eq!(x.data, vec![vec![1.0], vec![0.0]]);
        assert_eq!(y.data, vec![vec![1.0], vec![0.0]]);

        assert!(matches!(schema.encode_dataset(&[]), Err(Error::InvalidData(_))));
    }

    #[test]
    fn schema_loads_from_json() {
        let json = r#"{
            "inputs": [
                {"name": "flag", "type": "binary"},
                {"name": "size", "type": "continuous", "min": 0.0, "max": 10.0},
                {"name": "colour", "type": "categorical", "categories": ["a", "b"]}
            ],
            "outputs": [
                {"name": "score", "type": "probability"}
            ]
        }"#;
        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.inputs[1], FeatureDefinition::continuous("size", 0.0, 10.0));
        assert_eq!(schema.input_width(), 4);

        let rec: InputRecord =
            serde_json::from_str(r#"{"flag": true, "size": 2, "colour": null}"#).unwrap();
        assert_eq!(
            schema.encode_input(&rec).unwrap().data,
            vec![vec![1.0, 0.2, 1.0, 0.0]]
        );
    }

    proptest! {
        #[test]
        fn continuous_round_trip(min in -1e3..1e3f64, span in 1e-3..1e3f64, t in 0.0..=1.0f64) {
            let max = min + span;
            let v = min + t * span;
            let schema = Schema::new(
                vec![FeatureDefinition::continuous("v", min, max)],
                vec![OutputDefinition::continuous("v", min, max)],
            );
            let encoded = schema.encode_input(&record(vec![("v", v.into())])).unwrap();
            let decoded = schema.decode(&encoded).unwrap();
            prop_assert!((decoded["v"] - v).abs() <= 1e-9 * (1.0 + v.abs() + span));
        }
    }
}
