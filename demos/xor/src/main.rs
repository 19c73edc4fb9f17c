use feedfwd::network::{trainer::Trainer, Network};
use feedfwd::prelude::Result;

fn main() -> Result<()> {
    let mut net = Network::new(&[2, 3, 1])?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let trainer = Trainer::new(50_000, 2.0).with_log(Some(5_000));
    trainer.train(&mut net, &inputs, &targets)?;

    println!("------------------");
    for (input, target) in inputs.iter().zip(&targets) {
        let out = net.calculate(input)?.output()[0];
        println!("{input:?} -> {out:.3} (target {})", target[0]);
    }

    Ok(())
}
