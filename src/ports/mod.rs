/// Ports module defining interfaces for hexagonal architecture
///
/// The application core talks to the outside world (catalog files, build
/// files, console, output) only through the outbound ports defined here.
pub mod outbound;
