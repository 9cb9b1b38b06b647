// Copyright 2025-2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract factories backed by an alloy provider.

use std::time::Duration;

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, TxHash},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
};

use super::{
    ArtifactSource, ConfirmationError, ContractFactory, DeploymentRequest, PendingDeployment,
    SubmissionError,
};
use crate::{
    core::artifact::{Artifact, ArtifactError, HardhatArtifacts},
    utils::color::DebugColor,
};

/// Transaction settings handed to the chain client.
///
/// Unset fields leave the decision to the provider: gas pricing comes from its fillers and the
/// confirmation wait follows its own policy.
#[derive(Debug, Clone, Default)]
pub struct TransactionConfig {
    pub max_fee_per_gas_wei: Option<u128>,
    pub required_confirmations: Option<u64>,
    pub confirmation_timeout: Option<Duration>,
}

/// Artifact source that deploys through an alloy provider.
#[derive(Debug, Clone)]
pub struct ChainDeployer<P> {
    artifacts: HardhatArtifacts,
    provider: P,
    config: TransactionConfig,
}

impl<P: Provider + Clone> ChainDeployer<P> {
    pub fn new(artifacts: HardhatArtifacts, provider: P, config: TransactionConfig) -> Self {
        Self {
            artifacts,
            provider,
            config,
        }
    }
}

impl<P: Provider + Clone> ArtifactSource for ChainDeployer<P> {
    type Factory = AlloyFactory<P>;

    fn get_factory(&self, contract: &str) -> Result<AlloyFactory<P>, ArtifactError> {
        let artifact = self.artifacts.load(contract)?;
        Ok(AlloyFactory::new(
            artifact,
            self.provider.clone(),
            self.config.clone(),
        ))
    }
}

/// Deploys one compiled artifact.
#[derive(Debug, Clone)]
pub struct AlloyFactory<P> {
    artifact: Artifact,
    provider: P,
    config: TransactionConfig,
}

impl<P> AlloyFactory<P> {
    pub fn new(artifact: Artifact, provider: P, config: TransactionConfig) -> Self {
        Self {
            artifact,
            provider,
            config,
        }
    }

    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Creation code followed by the ABI-encoded constructor arguments.
    pub fn deploy_code(&self, args: &[String]) -> Result<Vec<u8>, SubmissionError> {
        let mut code = self.artifact.bytecode.to_vec();
        let Some(constructor) = self.artifact.abi.constructor() else {
            if args.is_empty() {
                return Ok(code);
            }
            return Err(SubmissionError::InvalidConstructor(format!(
                "{} has no constructor but {} arguments were given",
                self.artifact.name,
                args.len()
            )));
        };
        if args.len() != constructor.inputs.len() {
            return Err(SubmissionError::InvalidConstructor(format!(
                "mismatch number of constructor arguments (want {:?} ({}); got {})",
                constructor.inputs,
                constructor.inputs.len(),
                args.len(),
            )));
        }

        let mut values = Vec::<DynSolValue>::with_capacity(args.len());
        for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
            let ty = param
                .resolve()
                .map_err(|err| SubmissionError::InvalidArgument {
                    param: param.to_string(),
                    reason: err.to_string(),
                })?;
            let value = ty
                .coerce_str(arg)
                .map_err(|err| SubmissionError::InvalidArgument {
                    param: param.to_string(),
                    reason: err.to_string(),
                })?;
            values.push(value);
        }
        let encoded = constructor
            .abi_encode_input_raw(&values)
            .map_err(|err| SubmissionError::InvalidConstructor(err.to_string()))?;
        code.extend(encoded);
        Ok(code)
    }
}

impl<P: Provider + Clone> ContractFactory for AlloyFactory<P> {
    type Pending = AlloyPendingDeployment;

    async fn deploy(
        &self,
        request: DeploymentRequest,
    ) -> Result<AlloyPendingDeployment, SubmissionError> {
        let code = self.deploy_code(&request.args)?;
        let mut tx = TransactionRequest::default().with_deploy_code(code);
        if let Some(wei) = self.config.max_fee_per_gas_wei {
            tx.max_fee_per_gas = Some(wei);
        }

        let pending = self.provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());
        Ok(AlloyPendingDeployment {
            pending,
            required_confirmations: self.config.required_confirmations,
            timeout: self.config.confirmation_timeout,
        })
    }
}

/// A creation transaction accepted by the RPC endpoint.
pub struct AlloyPendingDeployment {
    pending: PendingTransactionBuilder<Ethereum>,
    required_confirmations: Option<u64>,
    timeout: Option<Duration>,
}

impl PendingDeployment for AlloyPendingDeployment {
    fn tx_hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }

    async fn confirm(self) -> Result<Address, ConfirmationError> {
        let tx_hash = self.tx_hash();
        let mut pending = self.pending;
        if let Some(confirmations) = self.required_confirmations {
            pending = pending.with_required_confirmations(confirmations);
        }
        if self.timeout.is_some() {
            pending = pending.with_timeout(self.timeout);
        }

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(ConfirmationError::Reverted { tx_hash });
        }
        debug!(@grey, "deploy tx mined in block {:?}", receipt.block_number);
        receipt
            .contract_address
            .ok_or(ConfirmationError::MissingAddress { tx_hash })
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, Bloom, B256, U256},
        providers::{mock::Asserter, ProviderBuilder},
        sol_types::SolValue,
    };
    use serde_json::json;

    use super::*;
    use crate::core::{
        artifact::tests::{write_artifact, COUNTER_ARTIFACT},
        deployment::{
            assemble, ConstructorLayout, DeploymentConfig, DeploymentError, DeploymentRunner,
            DeploymentStage, OracleParams, DEFAULT_CONTRACT,
        },
        network::NetworkRegistry,
    };

    const EMPTY_ARTIFACT: &str =
        r#"{"abi": [], "bytecode": "0x6080604052", "deployedBytecode": "0x6080"}"#;
    const TX_HASH: TxHash = TxHash::repeat_byte(0x11);

    fn factory(json: &str, contract: &str) -> AlloyFactory<impl Provider + Clone> {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(dir.path(), &format!("{contract}.sol"), contract, json);
        let artifact = HardhatArtifacts::new(dir.path()).load(contract).unwrap();
        let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse().unwrap());
        AlloyFactory::new(artifact, provider, TransactionConfig::default())
    }

    #[test]
    fn encodes_constructor_arguments() {
        let factory = factory(COUNTER_ARTIFACT, "Counter");
        let owner = address!("0x6a6b6121168c4Ed068204661cbCA3349b61e3e98");
        let code = factory
            .deploy_code(&[owner.to_string(), "42".to_string()])
            .unwrap();

        let bytecode = &factory.artifact().bytecode;
        assert_eq!(&code[..bytecode.len()], &bytecode[..]);
        assert_eq!(
            &code[bytecode.len()..],
            &(owner, U256::from(42)).abi_encode_params()[..]
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let factory = factory(COUNTER_ARTIFACT, "Counter");
        let err = factory.deploy_code(&["42".to_string()]).unwrap_err();
        assert!(matches!(err, SubmissionError::InvalidConstructor(_)));
    }

    #[test]
    fn rejects_unparseable_argument() {
        let factory = factory(COUNTER_ARTIFACT, "Counter");
        let err = factory
            .deploy_code(&["not an address".to_string(), "42".to_string()])
            .unwrap_err();
        match err {
            SubmissionError::InvalidArgument { param, .. } => assert!(param.contains("_owner")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_constructor_takes_no_arguments() {
        let factory = factory(EMPTY_ARTIFACT, DEFAULT_CONTRACT);
        let network = NetworkRegistry::get("kovan").unwrap();

        let args = assemble(ConstructorLayout::Empty, network, &OracleParams::default());
        assert_eq!(
            factory.deploy_code(&args).unwrap(),
            vec![0x60, 0x80, 0x60, 0x40, 0x52]
        );

        let args = assemble(ConstructorLayout::Oracle, network, &OracleParams::default());
        assert!(matches!(
            factory.deploy_code(&args),
            Err(SubmissionError::InvalidConstructor(_))
        ));
    }

    #[test]
    fn oracle_constructor_encodes_network_values() {
        let json = r#"{
            "abi": [{
                "type": "constructor",
                "stateMutability": "nonpayable",
                "inputs": [
                    { "name": "_poHAddress", "type": "address", "internalType": "address" },
                    { "name": "_linkAddress", "type": "address", "internalType": "address" },
                    { "name": "_oracleAddress", "type": "address", "internalType": "address" },
                    { "name": "_fee", "type": "uint256", "internalType": "uint256" },
                    { "name": "_feePower", "type": "uint256", "internalType": "uint256" },
                    { "name": "_apiAddressURL", "type": "string", "internalType": "string" },
                    { "name": "_apiAuthorURL", "type": "string", "internalType": "string" }
                ]
            }],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;
        let factory = factory(json, "PoHTwitterV5");
        let network = NetworkRegistry::get("rinkeby").unwrap();
        let params = OracleParams::default();
        let args = assemble(ConstructorLayout::Oracle, network, &params);

        let code = factory.deploy_code(&args).unwrap();
        let expected = (
            network.proof_of_humanity,
            network.link_token,
            network.oracle,
            U256::from(params.fee),
            U256::from(params.fee_power),
            params.api_address_url.clone(),
            params.api_author_url.clone(),
        )
            .abi_encode_params();
        assert_eq!(&code[5..], &expected[..]);
    }

    /// A deployer whose RPC responses are answered, in order, by the returned asserter.
    fn mocked_deployer() -> (tempfile::TempDir, ChainDeployer<impl Provider + Clone>, Asserter) {
        let dir = tempfile::tempdir().unwrap();
        write_artifact(
            dir.path(),
            "PoHTwitterV5.sol",
            DEFAULT_CONTRACT,
            EMPTY_ARTIFACT,
        );
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        let deployer = ChainDeployer::new(
            HardhatArtifacts::new(dir.path()),
            provider,
            TransactionConfig::default(),
        );
        (dir, deployer, asserter)
    }

    fn receipt(status: u8, contract_address: Option<Address>) -> serde_json::Value {
        json!({
            "transactionHash": TX_HASH,
            "transactionIndex": "0x0",
            "blockHash": B256::repeat_byte(0x22),
            "blockNumber": "0x10",
            "from": Address::repeat_byte(0x33),
            "to": null,
            "cumulativeGasUsed": "0x5208",
            "gasUsed": "0x5208",
            "effectiveGasPrice": "0x3b9aca00",
            "contractAddress": contract_address,
            "logs": [],
            "logsBloom": Bloom::ZERO,
            "type": "0x2",
            "status": format!("{status:#x}"),
        })
    }

    /// Answers the creation tx, then the receipt lookups made while waiting for it.
    fn mine(asserter: &Asserter, receipt: serde_json::Value) {
        asserter.push_success(&TX_HASH);
        asserter.push_success(&receipt);
        asserter.push_success(&receipt);
    }

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            contract: DEFAULT_CONTRACT.to_string(),
            args: vec![],
        }
    }

    #[tokio::test]
    async fn rpc_rejection_is_a_submission_error() {
        let (_dir, deployer, asserter) = mocked_deployer();
        asserter.push_failure_msg("insufficient funds for gas * price + value");

        let factory = deployer.get_factory(DEFAULT_CONTRACT).unwrap();
        let err = factory.deploy(request()).await.err().unwrap();
        assert!(matches!(err, SubmissionError::Rpc(_)));
        assert!(err.to_string().contains("insufficient funds"));
    }

    #[tokio::test]
    async fn mined_deployment_reports_contract_address() {
        let (_dir, deployer, asserter) = mocked_deployer();
        let created = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
        mine(&asserter, receipt(1, Some(created)));

        let factory = deployer.get_factory(DEFAULT_CONTRACT).unwrap();
        let pending = factory.deploy(request()).await.unwrap();
        assert_eq!(pending.tx_hash(), TX_HASH);
        assert_eq!(pending.confirm().await.unwrap(), created);
    }

    #[tokio::test]
    async fn failed_receipt_is_reverted() {
        let (_dir, deployer, asserter) = mocked_deployer();
        mine(&asserter, receipt(0, None));

        let factory = deployer.get_factory(DEFAULT_CONTRACT).unwrap();
        let pending = factory.deploy(request()).await.unwrap();
        let err = pending.confirm().await.unwrap_err();
        assert!(matches!(err, ConfirmationError::Reverted { tx_hash } if tx_hash == TX_HASH));
    }

    #[tokio::test]
    async fn receipt_without_contract_address_is_an_error() {
        let (_dir, deployer, asserter) = mocked_deployer();
        mine(&asserter, receipt(1, None));

        let factory = deployer.get_factory(DEFAULT_CONTRACT).unwrap();
        let pending = factory.deploy(request()).await.unwrap();
        let err = pending.confirm().await.unwrap_err();
        assert!(matches!(err, ConfirmationError::MissingAddress { tx_hash } if tx_hash == TX_HASH));
    }

    #[tokio::test]
    async fn runner_reports_revert_from_chain() {
        let (_dir, deployer, asserter) = mocked_deployer();
        mine(&asserter, receipt(0, None));

        let runner = DeploymentRunner::new(deployer, DeploymentConfig::default());
        let err = runner
            .run(NetworkRegistry::get("kovan").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DeploymentError::Confirmation {
                source: ConfirmationError::Reverted { .. },
                ..
            }
        ));
        assert_eq!(err.stage(), DeploymentStage::Submitted);
    }
}
