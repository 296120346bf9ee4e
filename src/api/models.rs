use serde::Serialize;

/// Server-side template behind the "Single-Page Application" flow.
pub const SINGLE_PAGE_TEMPLATE_ID: &str = "6a90e4b0-fbff-42d7-bfde-1efd98f07cd7";

pub const LOCAL_USERNAME_CLAIM: &str = "http://wso2.org/claims/username";

/// Application creation request for the `/api/server/v1/applications`
/// endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub template_id: String,
    pub advanced_configurations: AdvancedConfigurations,
    pub associated_roles: AssociatedRoles,
    pub authentication_sequence: AuthenticationSequence,
    pub claim_configuration: ClaimConfiguration,
    pub inbound_protocol_configuration: InboundProtocolConfiguration,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedConfigurations {
    pub discoverable_by_end_users: bool,
    pub skip_login_consent: bool,
    pub skip_logout_consent: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociatedRoles {
    pub allowed_audience: String,
    pub roles: Vec<AssociatedRole>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssociatedRole {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationSequence {
    #[serde(rename = "type")]
    pub kind: String,
    pub steps: Vec<AuthenticationStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationStep {
    pub id: u32,
    pub options: Vec<AuthenticatorOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatorOption {
    pub idp: String,
    pub authenticator: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimConfiguration {
    pub dialect: String,
    pub requested_claims: Vec<RequestedClaim>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestedClaim {
    pub claim: Claim,
}

#[derive(Debug, Clone, Serialize)]
pub struct Claim {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InboundProtocolConfiguration {
    pub oidc: OidcConfiguration,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcConfiguration {
    pub access_token: AccessTokenConfiguration,
    pub allowed_origins: Vec<String>,
    #[serde(rename = "callbackURLs")]
    pub callback_urls: Vec<String>,
    pub grant_types: Vec<String>,
    pub pkce: Pkce,
    pub public_client: bool,
    pub refresh_token: RefreshTokenConfiguration,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenConfiguration {
    pub application_access_token_expiry_in_seconds: u64,
    pub binding_type: String,
    #[serde(rename = "revokeTokensWhenIDPSessionTerminated")]
    pub revoke_tokens_when_idp_session_terminated: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_access_token_expiry_in_seconds: u64,
    pub validate_token_binding: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pkce {
    pub mandatory: bool,
    pub support_plain_transform_algorithm: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenConfiguration {
    pub expiry_in_seconds: u64,
    pub renew_refresh_token: bool,
}

/// What the server tells us about a freshly created application.
#[derive(Debug, Clone)]
pub struct CreatedApplication {
    pub id: Option<String>,
}

impl Application {
    /// Single-page application payload: fixed defaults plus the two
    /// user-supplied fields. The redirect URL doubles as the allowed
    /// origin.
    pub fn single_page(name: &str, redirect_url: &str) -> Self {
        Self {
            name: name.to_string(),
            template_id: SINGLE_PAGE_TEMPLATE_ID.to_string(),
            advanced_configurations: AdvancedConfigurations {
                discoverable_by_end_users: false,
                skip_login_consent: true,
                skip_logout_consent: true,
            },
            associated_roles: AssociatedRoles {
                allowed_audience: "APPLICATION".to_string(),
                roles: Vec::new(),
            },
            authentication_sequence: AuthenticationSequence {
                kind: "DEFAULT".to_string(),
                steps: vec![AuthenticationStep {
                    id: 1,
                    options: vec![AuthenticatorOption {
                        idp: "LOCAL".to_string(),
                        authenticator: "basic".to_string(),
                    }],
                }],
            },
            claim_configuration: ClaimConfiguration {
                dialect: "LOCAL".to_string(),
                requested_claims: vec![RequestedClaim {
                    claim: Claim {
                        uri: LOCAL_USERNAME_CLAIM.to_string(),
                    },
                }],
            },
            inbound_protocol_configuration: InboundProtocolConfiguration {
                oidc: OidcConfiguration {
                    access_token: AccessTokenConfiguration {
                        application_access_token_expiry_in_seconds: 3600,
                        binding_type: "sso-session".to_string(),
                        revoke_tokens_when_idp_session_terminated: true,
                        kind: "Default".to_string(),
                        user_access_token_expiry_in_seconds: 3600,
                        validate_token_binding: false,
                    },
                    allowed_origins: vec![redirect_url.to_string()],
                    callback_urls: vec![redirect_url.to_string()],
                    grant_types: vec![
                        "authorization_code".to_string(),
                        "refresh_token".to_string(),
                    ],
                    pkce: Pkce {
                        mandatory: true,
                        support_plain_transform_algorithm: false,
                    },
                    public_client: true,
                    refresh_token: RefreshTokenConfiguration {
                        expiry_in_seconds: 86400,
                        renew_refresh_token: true,
                    },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_page_payload_matches_wire_format() {
        let application =
            Application::single_page("Acme", "https://app.acme.test/callback");
        let value = serde_json::to_value(&application).unwrap();

        assert_eq!(value["name"], json!("Acme"));
        assert_eq!(value["templateId"], json!(SINGLE_PAGE_TEMPLATE_ID));

        let advanced = &value["advancedConfigurations"];
        assert_eq!(advanced["discoverableByEndUsers"], json!(false));
        assert_eq!(advanced["skipLoginConsent"], json!(true));
        assert_eq!(advanced["skipLogoutConsent"], json!(true));

        assert_eq!(value["associatedRoles"]["allowedAudience"], json!("APPLICATION"));
        assert_eq!(value["associatedRoles"]["roles"], json!([]));

        let sequence = &value["authenticationSequence"];
        assert_eq!(sequence["type"], json!("DEFAULT"));
        assert_eq!(sequence["steps"][0]["id"], json!(1));
        assert_eq!(sequence["steps"][0]["options"][0]["idp"], json!("LOCAL"));
        assert_eq!(
            sequence["steps"][0]["options"][0]["authenticator"],
            json!("basic")
        );

        let claims = &value["claimConfiguration"];
        assert_eq!(claims["dialect"], json!("LOCAL"));
        assert_eq!(
            claims["requestedClaims"][0]["claim"]["uri"],
            json!(LOCAL_USERNAME_CLAIM)
        );
    }

    #[test]
    fn oidc_block_uses_the_url_for_both_origins_and_callbacks() {
        let url = "https://app.acme.test/callback";
        let application = Application::single_page("Acme", url);
        let value = serde_json::to_value(&application).unwrap();

        let oidc = &value["inboundProtocolConfiguration"]["oidc"];
        assert_eq!(oidc["allowedOrigins"], json!([url]));
        assert_eq!(oidc["callbackURLs"], json!([url]));
        assert_eq!(
            oidc["grantTypes"],
            json!(["authorization_code", "refresh_token"])
        );
        assert_eq!(oidc["publicClient"], json!(true));
        assert_eq!(oidc["pkce"]["mandatory"], json!(true));
        assert_eq!(oidc["pkce"]["supportPlainTransformAlgorithm"], json!(false));

        let access = &oidc["accessToken"];
        assert_eq!(access["applicationAccessTokenExpiryInSeconds"], json!(3600));
        assert_eq!(access["userAccessTokenExpiryInSeconds"], json!(3600));
        assert_eq!(access["bindingType"], json!("sso-session"));
        assert_eq!(access["revokeTokensWhenIDPSessionTerminated"], json!(true));
        assert_eq!(access["type"], json!("Default"));
        assert_eq!(access["validateTokenBinding"], json!(false));

        assert_eq!(oidc["refreshToken"]["expiryInSeconds"], json!(86400));
        assert_eq!(oidc["refreshToken"]["renewRefreshToken"], json!(true));
    }
}
