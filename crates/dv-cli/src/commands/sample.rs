use dv_fiction::{EngineConfig, GrammarGenerator};

pub fn run(count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let generator =
        GrammarGenerator::builtin(&config).map_err(|e| format!("invalid grammar: {e}"))?;

    let mut rng = config.rng();
    for _ in 0..count {
        println!("  {} {}", config.sample_marker, generator.generate_text(&mut rng));
    }

    Ok(())
}
