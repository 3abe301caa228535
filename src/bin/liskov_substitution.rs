use solid::Principle;

fn main() -> anyhow::Result<()> {
    solid::run_demos(&[Principle::LiskovSubstitution])
}
