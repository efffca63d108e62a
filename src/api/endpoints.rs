pub fn site_config_endpoint() -> &'static str {
    "/api/public/templates/devportfolio/config"
}

pub fn site_config_query(portfolio_id: &str) -> Vec<(String, String)> {
    vec![("portfolioId".to_string(), portfolio_id.to_string())]
}
