use ethers::contract::abigen;

abigen!(
    Erc20,
    r#"[
        function balanceOf(address owner) view returns (uint256)
        function allowance(address owner, address spender) view returns (uint256)
        function approve(address spender, uint256 amount) returns (bool)
    ]"#
);

abigen!(
    BexVault,
    r#"[
        struct BatchSwapStep { address poolId; address assetIn; uint256 amountIn; address assetOut; uint256 amountOut; bytes userData; }
        function batchSwap(uint8 kind, BatchSwapStep[] swaps, uint256 deadline) payable
        function addLiquidity(address pool, address receiver, address[] assetsIn, uint256[] amountsIn) payable
    ]"#
);

abigen!(
    HoneyRouter,
    r#"[
        function mint(address to, address collateral, uint256 amount) returns (uint256)
        function redeem(address to, uint256 amount, address collateral) returns (uint256)
    ]"#
);

abigen!(
    BendPool,
    r#"[
        function supply(address asset, uint256 amount, address onBehalfOf, uint16 referralCode)
        function borrow(address asset, uint256 amount, uint256 interestRateMode, uint16 referralCode, address onBehalfOf)
    ]"#
);

abigen!(
    HoneyJar,
    r#"[
        function hasMinted(address account) view returns (bool)
        function buy()
    ]"#
);

abigen!(
    BeraNames,
    r#"[
        function available(string name) view returns (bool)
        function priceOf(string name) view returns (uint256)
        function register(string name, address owner) payable
    ]"#
);

/// Batch swap kind "given in": the input amount is fixed.
pub const SWAP_KIND_GIVEN_IN: u8 = 0;

pub const SWAP_DEADLINE: u64 = 99_999_999;

/// Variable-rate borrow mode on Bend.
pub const INTEREST_RATE_VARIABLE: u64 = 2;

/// Init code that stores a 10-byte runtime returning 42 for any call.
pub const DEPLOY_BYTECODE: &str = "600a600c600039600a6000f3602a60005260206000f3";
