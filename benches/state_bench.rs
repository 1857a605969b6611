#[macro_use]
extern crate bencher;
extern crate qregister;

use bencher::Bencher;

use qregister::prelude::*;

fn uniform_register(n: usize) -> QubitRegister {
    let mult = (1.0 / (1u64 << n) as f64).sqrt();
    QubitRegister::from_reals(&vec![mult; 1 << n]).unwrap()
}

fn bench_build_single(b: &mut Bencher) {
    let builder = GateBuilder::new(6);
    b.iter(|| builder.single(3, Primitive::LeftRotation).unwrap());
}

fn bench_build_xor(b: &mut Bencher) {
    let builder = GateBuilder::new(6);
    b.iter(|| builder.build(&Gate::Xor { control: 1, target: 4 }).unwrap());
}

fn bench_apply_rotation(b: &mut Bencher) {
    let r = uniform_register(6);
    b.iter(|| r.left_rotation(2).unwrap());
}

fn bench_apply_xor_larger(b: &mut Bencher) {
    let r = uniform_register(8);
    b.iter(|| r.xor(0, 7).unwrap());
}

fn bench_kron(b: &mut Bencher) {
    let m = GateBuilder::new(4).single(0, Primitive::SShift).unwrap();
    let i = Matrix::identity(4);
    b.iter(|| m.kron(&i));
}

fn bench_disentangle(b: &mut Bencher) {
    let qubits: Vec<Qubit> = (0..10).map(|i| Qubit::from_bool(i % 2 == 0)).collect();
    let r = QubitRegister::from_qubits(&qubits).unwrap();
    b.iter(|| r.disentangle());
}

benchmark_group!(
    benches,
    bench_build_single,
    bench_build_xor,
    bench_apply_rotation,
    bench_apply_xor_larger,
    bench_kron,
    bench_disentangle
);
benchmark_main!(benches);
