use std::error::Error;

use matrices_core::{Field, Matrix, Vector};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut rng = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let a = Matrix::from_values(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    let b = Matrix::random(3, 2, &mut rng).apply(|x| (x * 100.0).round());
    log::info!("A shape {:?}, B shape {:?}", a.shape(), b.shape());

    println!("A =\n{}\n", a);
    println!("B =\n{}\n", b);
    println!("A x B =\n{}\n", a.multiply(&b)?);
    println!("A^T =\n{}\n", a.transpose());
    println!("A + A =\n{}\n", a.add(&a)?);
    println!("max(A) = {}, min(A) = {}", a.max()?, a.min()?);

    let v = Vector::from(vec![1.0, 2.0, 3.0]);
    let w = Vector::random(3, &mut rng);
    println!("v = {}", v);
    println!("w = {:.4}", w);
    println!("v . w = {:.4}", v.dot(&w)?);
    println!("A v = {}", a.mul_vector(&v)?);

    if let Err(err) = a.multiply(&a) {
        log::warn!("Expected failure: {}", err);
    }
    println!("{}", Matrix::zeros(0, 0));

    Ok(())
}
