pub mod ask;
pub mod test_probe_route;
