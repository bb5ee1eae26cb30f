// Prints the service's OpenAPI JSON specification to standard output.
fn main() -> anyhow::Result<()> {
    let spec = demo_kit::bootstrap::openapi_json(&demo_service::build_openapi_spec())?;
    print!("{}", spec);
    Ok(())
}
