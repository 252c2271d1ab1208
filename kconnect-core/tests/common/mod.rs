use kconnect_core::{ExecutionStrategy, OracleKind, Verifier, VerifierBuilder};

#[must_use]
pub fn verifier(upper_bound: usize, strategy: ExecutionStrategy, short_circuit: bool) -> Verifier {
    VerifierBuilder::new()
        .with_upper_bound(upper_bound)
        .with_execution_strategy(strategy)
        .with_short_circuit(short_circuit)
        .build()
        .expect("verifier configuration must be valid")
}

#[must_use]
pub fn verifier_with_oracle(upper_bound: usize, oracle: OracleKind) -> Verifier {
    VerifierBuilder::new()
        .with_upper_bound(upper_bound)
        .with_oracle(oracle)
        .build()
        .expect("verifier configuration must be valid")
}
