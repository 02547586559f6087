//! Fixed prompt pairs sent to the upstream completion API. The conversion
//! prompts insist on raw output; the sanitizer deals with models that ignore
//! the instruction anyway.

pub const CONVERSION_SYSTEM_PROMPT: &str = "You are an expert smart contract developer who specializes in converting Solidity code to Clarity language. Your responses should contain ONLY the raw Clarity code without any markdown formatting, explanations, or introductory text. Do not use ```clarity markers, do not start with 'Here is the code:', and do not add any explanations. Just return the Clarity code directly.";

const CONVERSION_TEMPLATE: &str = r#"
Convert the following Solidity NFT smart contract code to Clarity language.
Focus on preserving functionality while utilizing Clarity's features and patterns.
Ensure all NFT-related functionality is properly implemented in Clarity.

IMPORTANT: Return ONLY the raw Clarity code without any markdown formatting, explanations, or introductory text.
Do not include ```clarity markers, do not start with "Here is the code:", and do not add any explanations.
Just return the Clarity code directly.

Solidity code:
```solidity
{solidity_code}
```
"#;

pub const EXPLAIN_SYSTEM_PROMPT: &str = "You are an expert Clarity smart contract developer and a patient tutor. You explain Clarity contracts in clear, plain English for developers who are new to the language.";

const EXPLAIN_TEMPLATE: &str = r#"
Explain what the following Clarity smart contract does. Walk through its data
structures and public functions, point out anything a newcomer to Clarity
would find surprising, and keep the explanation in plain prose.

Clarity code:
```clarity
{clarity_code}
```
"#;

pub fn conversion_prompt(solidity_code: &str) -> String {
    CONVERSION_TEMPLATE.replace("{solidity_code}", solidity_code)
}

pub fn explain_prompt(clarity_code: &str) -> String {
    EXPLAIN_TEMPLATE.replace("{clarity_code}", clarity_code)
}
