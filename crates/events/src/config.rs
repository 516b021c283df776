use lapin::uri::{AMQPAuthority, AMQPUri, AMQPUserInfo};

/// Default exchange the analysis consumer binds to.
pub const DEFAULT_EXCHANGE: &str = "datas_exchanges";
/// Default routing key the analysis consumer binds with.
pub const DEFAULT_ROUTING_KEY: &str = "minha_routing_key";

/// Broker connection settings and the fixed exchange/routing key.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub vhost: String,
    pub exchange: String,
    pub routing_key: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5672,
            username: "guest".to_string(),
            password: "guest".to_string(),
            vhost: "/".to_string(),
            exchange: DEFAULT_EXCHANGE.to_string(),
            routing_key: DEFAULT_ROUTING_KEY.to_string(),
        }
    }
}

impl BrokerConfig {
    /// Structured URI, so credentials never need percent-encoding by hand.
    pub fn amqp_uri(&self) -> AMQPUri {
        AMQPUri {
            authority: AMQPAuthority {
                userinfo: AMQPUserInfo {
                    username: self.username.clone(),
                    password: self.password.clone(),
                },
                host: self.host.clone(),
                port: self.port,
            },
            vhost: self.vhost.clone(),
            ..Default::default()
        }
    }
}
