use formrelay_core_health_contracts::{HealthFeatureService, HealthStatus};
use formrelay_shared_contracts::time::TimeService;

#[derive(Debug, Clone)]
pub struct HealthFeatureServiceImpl<Time> {
    pub time: Time,
}

impl<Time> HealthFeatureService for HealthFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use formrelay_shared_contracts::time::MockTimeService;

    use super::*;

    #[tokio::test]
    async fn get_status() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let sut = HealthFeatureServiceImpl {
            time: MockTimeService::new().with_now(now),
        };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { timestamp: now });
    }
}
