use qregister::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> QuantumResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let a = Qubit::one();
    let b = Qubit::from_bool(false);
    let c = Qubit::from_bool(false);
    let system = QubitRegister::from_qubits(&[a, b, c])?;
    info!(%system, "initial register");

    // Entangle b and c, then entangle a with the pair.
    let system = system.apply_all(&[
        Gate::LeftShift(1),
        Gate::Xor {
            control: 1,
            target: 2,
        },
        Gate::Xor {
            control: 0,
            target: 1,
        },
        Gate::RightShift(0),
    ])?;
    println!("{}", system);

    let system = system.apply_all(&[
        Gate::SShift(0),
        Gate::Xor {
            control: 1,
            target: 2,
        },
        Gate::Xor {
            control: 2,
            target: 0,
        },
        Gate::SShift(0),
        Gate::TShift(2),
        Gate::Xor {
            control: 2,
            target: 0,
        },
    ])?;
    println!("{}", system);

    for (position, factor) in system.disentangle().iter().enumerate() {
        match factor {
            Factor::Separable(q) => println!("qubit {}: {}", position, q),
            Factor::Entangled => println!("qubit {}: entangled", position),
        }
    }
    Ok(())
}
