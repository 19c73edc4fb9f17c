use feedfwd::network::Network;
use feedfwd::prelude::Result;

/// Overfits a small network onto two fixed samples, each trained with its
/// own rate, then prints the final predictions.
fn main() -> Result<()> {
    let mut net = Network::new(&[4, 1, 3, 4])?;

    let input = [0.1, 0.5, 0.6, 0.8];
    let target = [0.0, 1.0, 0.0, 0.0];

    let input2 = [0.6, 0.3, 0.5, 0.4];
    let target2 = [0.1, 0.9, 0.1, 0.0];

    for _ in 0..1_000_000 {
        net.train(&input, &target, 0.3)?;
        net.train(&input2, &target2, 0.5)?;
    }

    println!("{:?}", net.calculate(&input)?.output());
    println!("{:?}", net.calculate(&input2)?.output());

    Ok(())
}
