use criterion::{black_box, criterion_group, criterion_main, Criterion};
use feedfwd::network::{trainer::Trainer, Network};

fn train_tiny(iterations: usize) {
    let mut net = Network::new(&[2, 2, 1]).unwrap();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];

    let trainer = Trainer::new(iterations, 1.0);

    assert_eq!(Ok(()), trainer.train(&mut net, &inputs, &targets));
}

fn train_small(iterations: usize) {
    let mut net = Network::new(&[2, 10, 10, 2]).unwrap();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ];

    let trainer = Trainer::new(iterations, 0.01);

    assert_eq!(Ok(()), trainer.train(&mut net, &inputs, &targets));
}

fn train_medium(iterations: usize) {
    let mut net = Network::new(&[2, 20, 20, 20, 2]).unwrap();

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
    ];

    let trainer = Trainer::new(iterations, 0.01);

    assert_eq!(Ok(()), trainer.train(&mut net, &inputs, &targets));
}

fn forward(net: &Network, inputs: &[Vec<f64>]) {
    for input in inputs {
        assert!(net.calculate(input).is_ok());
    }
}

fn bench_forward(c: &mut Criterion) {
    let small = Network::new(&[2, 10, 10, 2]).unwrap();
    let medium = Network::new(&[2, 20, 20, 20, 2]).unwrap();

    let input_small = vec![vec![0.0; 2]; 10];
    let input_medium = vec![vec![0.0; 2]; 1_000];

    c.bench_function("forward small 10 inputs", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_small)))
    });
    c.bench_function("forward small 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&small), black_box(&input_medium)))
    });

    c.bench_function("forward medium 10 inputs", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_small)))
    });
    c.bench_function("forward medium 1,000 inputs", |b| {
        b.iter(|| forward(black_box(&medium), black_box(&input_medium)))
    });
}

fn bench_tiny(c: &mut Criterion) {
    c.bench_function("tiny 10 iterations", |b| {
        b.iter(|| train_tiny(black_box(10)))
    });
    c.bench_function("tiny 10,000 iterations", |b| {
        b.iter(|| train_tiny(black_box(10_000)))
    });
}

fn bench_small(c: &mut Criterion) {
    c.bench_function("small 10 iterations", |b| {
        b.iter(|| train_small(black_box(10)))
    });
    c.bench_function("small 10,000 iterations", |b| {
        b.iter(|| train_small(black_box(10_000)))
    });
}

fn bench_medium(c: &mut Criterion) {
    c.bench_function("medium 10 iterations", |b| {
        b.iter(|| train_medium(black_box(10)))
    });
    c.bench_function("medium 10,000 iterations", |b| {
        b.iter(|| train_medium(black_box(10_000)))
    });
}

criterion_group!(
    benches,
    bench_forward,
    bench_tiny,
    bench_small,
    bench_medium
);
criterion_main!(benches);
