//! Messaging contract ABI.

use alloy::sol;

sol! {
    /// L1 side of the messaging bridge.
    #[derive(Debug, PartialEq, Eq)]
    interface IMessagingContract {
        /// Send a message to an L2 contract; the attached value pays the L2 fee.
        function sendMessage(
            uint256 contractAddress,
            uint256 selector,
            uint256[] memory payload
        ) external payable;

        /// Consume a message previously sent from L2.
        function consumeMessage(uint256 fromAddress, uint256[] calldata payload) external;
    }
}
