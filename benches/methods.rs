use criterion::{criterion_group, criterion_main, Criterion};
use gradopt::{comparison::Method, Config, Point, Rosenbrock};

fn rosenbrock(c: &mut Criterion) {
    let f = Rosenbrock::default();
    let config = Config::default();

    for method in Method::ALL {
        c.bench_function(&format!("{} rosenbrock", method), |b| {
            b.iter(|| assert!(method.run(&f, &config).unwrap().converged()))
        });
    }
}

fn rosenbrock_classic(c: &mut Criterion) {
    let f = Rosenbrock::default();
    let mut config = Config::default();
    config.set_initial(Point::new(-1.2, 1.0));

    // Fletcher-Reeves and plain Polak-Ribiere lose descent from this point.
    for method in [Method::SteepestDescent, Method::PartialPolakRibiere] {
        c.bench_function(&format!("{} rosenbrock classic", method), |b| {
            b.iter(|| assert!(method.run(&f, &config).unwrap().converged()))
        });
    }
}

criterion_group!(methods, rosenbrock, rosenbrock_classic);
criterion_main!(methods);
