/// Wrapped FTM, the native-currency pivot every derived price is quoted in
pub const WFTM_ADDRESS: &str = "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83";

/// USDC on Fantom
pub const USDC_ADDRESS: &str = "0x04068da6c83afcfa0e13ba15a6696662335d5b75";

/// fUSDT on Fantom
pub const FUSDT_ADDRESS: &str = "0x049d68029688eabf473097a2fc38ef61633a3c7a";

/// DAI on Fantom
pub const DAI_ADDRESS: &str = "0x8d11ec38a3eb5e956b052f67da8bdc9bef8abf3e";

/// Whitelist applied when the configuration does not supply one
pub const DEFAULT_WHITELIST: &[&str] =
    &[WFTM_ADDRESS, USDC_ADDRESS, FUSDT_ADDRESS, DAI_ADDRESS];
