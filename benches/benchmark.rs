use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{thread_rng, Rng};

use glam::DVec2;
use orrery::prelude::*;

fn random_bodies(i: usize) -> Vec<Body> {
    let mut rng = thread_rng();

    (0..i)
        .map(|_| {
            let position = DVec2::new(rng.gen_range(-AU..AU), rng.gen_range(-AU..AU));
            let velocity = DVec2::new(rng.gen_range(-3E4..3E4), rng.gen_range(-3E4..3E4));
            let mass = rng.gen_range(1E20..1E26);

            Body::new("Random", position, mass)
                .unwrap()
                .with_velocity(velocity)
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Orrery");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    for i in (1..=10).map(|i| 2_usize.pow(i)) {
        let point_masses: Vec<_> = random_bodies(i).iter().map(Particle::point_mass).collect();

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel::BruteForce", i),
            &point_masses,
            |b, input| b.iter(|| parallel::BruteForce.compute(input).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("sequential::BruteForce", i),
            &point_masses,
            |b, input| b.iter(|| sequential::BruteForce.compute(input).unwrap()),
        );

        for update_order in [UpdateOrder::Simultaneous, UpdateOrder::Sequential] {
            let simulator = Simulator::new(random_bodies(i), DEFAULT_TIMESTEP)
                .unwrap()
                .with_update_order(update_order);

            group.bench_with_input(
                BenchmarkId::new(format!("Simulator::step ({update_order:?})"), i),
                &simulator,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |mut simulator| simulator.step().unwrap(),
                        criterion::BatchSize::SmallInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
