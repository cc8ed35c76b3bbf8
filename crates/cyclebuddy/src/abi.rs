use ethers::contract::abigen;

abigen!(
    CycleStreakTokenAbi,
    r#"[
        function name() view returns (string)
        function symbol() view returns (string)
        function addMinter(address minter)
        function isMinter(address account) view returns (bool)
    ]"#
);

abigen!(
    DailyRewardsAbi,
    r#"[
        function cycleStreakToken() view returns (address)
        function minimumCheckInInterval() view returns (uint32)
        function maximumCheckInInterval() view returns (uint32)
    ]"#
);
