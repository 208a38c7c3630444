fn main() -> anyhow::Result<()> {
    conductor_hooks::session_start::run_main()
}
