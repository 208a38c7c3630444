fn main() -> anyhow::Result<()> {
    conductor_hooks::stop::run_main()
}
