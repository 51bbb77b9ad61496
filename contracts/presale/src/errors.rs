use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–3) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidDecimals = 3,

    // --- Authorization (4) ---
    NotOwner = 4,

    // --- Round configuration (5–18) ---
    InvalidId = 5,
    InvalidTime = 6,
    InvalidParams = 7,
    SaleTimeInPast = 8,
    SaleAlreadyStarted = 9,
    SaleAlreadyEnded = 10,
    InvalidEndTime = 11,
    ZeroPrice = 12,
    ZeroTokens = 13,
    ZeroDecimals = 14,
    ZeroAddress = 15,
    VestingBeforeEnd = 16,
    AlreadyPaused = 17,
    NotPaused = 18,

    // --- Purchase (19–27) ---
    Paused = 19,
    ZeroAmount = 20,
    ExceedsAvailable = 21,
    InsufficientAllowance = 22,
    InsufficientPayment = 23,
    BuyWithNativeDisabled = 24,
    BuyWithStableDisabled = 25,
    OracleUnavailable = 26,
    InvalidOracleRate = 27,

    // --- Claim (28–33) ---
    NothingToClaim = 28,
    SaleTokenUnset = 29,
    ZeroClaimAmount = 30,
    AlreadyClaimed = 31,
    InsufficientContractBalance = 32,
    EmptyUserList = 33,

    // --- Arithmetic & schema (34–36) ---
    ArithmeticOverflow = 34,
    SchemaUpToDate = 35,
    UnknownSchemaVersion = 36,
}

impl Error {
    /// Human-readable text paired with the numeric code.
    pub fn message(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Already initialized",
            Error::NotInitialized => "Not initialized",
            Error::InvalidDecimals => "Decimals exceed price precision",
            Error::NotOwner => "Caller is not the owner",
            Error::InvalidId => "Invalid presale id",
            Error::InvalidTime => "Invalid time",
            Error::InvalidParams => "Invalid parameters",
            Error::SaleTimeInPast => "Sale time in past",
            Error::SaleAlreadyStarted => "Sale already started",
            Error::SaleAlreadyEnded => "Sale already ended",
            Error::InvalidEndTime => "Invalid end time",
            Error::ZeroPrice => "Zero price",
            Error::ZeroTokens => "Zero tokens to sell",
            Error::ZeroDecimals => "Zero decimals for the token",
            Error::ZeroAddress => "Zero token address",
            Error::VestingBeforeEnd => "Vesting starts before presale ends",
            Error::AlreadyPaused => "Already paused",
            Error::NotPaused => "Not paused",
            Error::Paused => "Presale paused",
            Error::ZeroAmount => "Invalid sale amount",
            Error::ExceedsAvailable => "Amount exceeds remaining allocation",
            Error::InsufficientAllowance => "Make sure to add enough allowance",
            Error::InsufficientPayment => "Less payment",
            Error::BuyWithNativeDisabled => "Buying with native currency is disabled",
            Error::BuyWithStableDisabled => "Buying with stablecoin is disabled",
            Error::OracleUnavailable => "Price feed call failed",
            Error::InvalidOracleRate => "Price feed returned a non-positive rate",
            Error::NothingToClaim => "Nothing to claim",
            Error::SaleTokenUnset => "Presale token address not set",
            Error::ZeroClaimAmount => "Zero claim amount",
            Error::AlreadyClaimed => "Already claimed",
            Error::InsufficientContractBalance => "Not enough tokens in the contract",
            Error::EmptyUserList => "Zero users length",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::SchemaUpToDate => "Schema already up to date",
            Error::UnknownSchemaVersion => "Unknown schema version",
        }
    }
}
