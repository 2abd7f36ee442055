/// Alert published when the health check finds the endpoint down.
#[derive(Debug, PartialEq)]
pub struct HealthAlert {
    pub service: String,
    pub url: String,
    pub status: String,
    pub reason: String,
    pub timestamp: String,
}
