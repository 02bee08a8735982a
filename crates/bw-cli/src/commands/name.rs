use bw_core::RandomSource;
use bw_core::names::roll_beast_name;

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut rng = RandomSource::new(seed);
    let name = roll_beast_name(&mut rng).map_err(|e| e.to_string())?;
    println!("{name}");
    Ok(())
}
