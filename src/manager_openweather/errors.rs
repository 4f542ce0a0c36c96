use std::fmt;

#[derive(Debug)]
pub enum WeatherError {
    Request(String),
    Format(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherError::Request(e) => write!(f, "WeatherError::Request: {}", e),
            WeatherError::Format(e) => write!(f, "WeatherError::Format: {}", e),
        }
    }
}
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        // The url carries the api key, keep it out of anything we print or return
        let e = e.without_url();

        let mut msg = e.to_string();
        let mut source = std::error::Error::source(&e);
        while let Some(s) = source {
            msg.push_str(": ");
            msg.push_str(&s.to_string());
            source = std::error::Error::source(s);
        }

        WeatherError::Request(msg)
    }
}
