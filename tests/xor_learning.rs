use rand::{rngs::StdRng, SeedableRng};
use shallownet::{Error, Matrix, MseLoss, NetConfig, Network, Parameters};

fn xor() -> (Matrix, Matrix) {
    let x = Matrix::from_data(vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])
    .expect("rectangular");
    let y = Matrix::from_data(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])
        .expect("rectangular");
    (x, y)
}

#[test]
fn training_reduces_mse_on_xor() {
    let (x, y) = xor();
    let config = NetConfig::new(2, 4, 1, 2000, 0.1);

    for seed in [1_u64, 7, 2024] {
        // Same seed and draw order as `train` uses for its initial parameters.
        let initial = Parameters::random(&config, &mut StdRng::seed_from_u64(seed));
        let initial_mse = MseLoss::loss(&initial.forward(&x).unwrap().output, &y).unwrap();

        let mut network = Network::new(config.clone()).unwrap();
        network.train_with_seed(&x, &y, seed).unwrap();
        let trained_mse = MseLoss::loss(&network.predict(&x).unwrap(), &y).unwrap();

        assert!(
            trained_mse < initial_mse,
            "seed {seed}: trained {trained_mse} !< initial {initial_mse}"
        );
    }
}

#[test]
fn retraining_starts_from_scratch() {
    let (x, y) = xor();
    let mut a = Network::new(NetConfig::new(2, 4, 1, 100, 0.1)).unwrap();
    let mut b = a.clone();

    a.train_with_seed(&x, &y, 9).unwrap();
    a.train_with_seed(&x, &y, 9).unwrap();
    b.train_with_seed(&x, &y, 9).unwrap();

    assert_eq!(a.parameters(), b.parameters());
}

#[test]
fn predict_rejects_wrong_width_after_training() {
    let (x, y) = xor();
    let mut network = Network::new(NetConfig::new(2, 4, 1, 10, 0.1)).unwrap();
    network.train_with_seed(&x, &y, 3).unwrap();

    assert!(matches!(
        network.predict(&Matrix::zeros(2, 3)),
        Err(Error::ShapeMismatch { .. })
    ));
}
