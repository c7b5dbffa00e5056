use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    // Setup
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // Input validation
    InvalidStartingPrice = 101,
    InvalidDuration = 102,
    ZeroBidAmount = 103,
    BidTooLow = 104,
    InvalidBidAmountCombination = 105,
    UnsupportedBidToken = 106,
    InvalidFeeRate = 107,
    NegativeAmount = 108,
    DuplicateCurrencyToken = 109,

    // State conflicts
    AuctionNotFound = 201,
    AuctionNotEnded = 202,
    AuctionAlreadyEnded = 203,
    AuctionClosed = 204,
    NoFeesToWithdraw = 205,
    BidTokenInUse = 206,
    ReentrantCall = 207,

    // Authorization
    Unauthorized = 301,
    OwnershipRenounced = 302,
    UnauthorizedSeller = 303,

    // Arithmetic
    ArithmeticOverflow = 401,
}
