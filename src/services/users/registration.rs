//! 회원가입 검증 규칙
//!
//! 스키마 단계를 통과한 요청은 [`RegistrationForm`]이 되고,
//! 아래 검사들이 정해진 순서로 적용됩니다. 각 검사는 독립적인 술어이며
//! 실패 시 태그된 [`RegistrationError`] 하나를 반환합니다.
//!
//! 1. 약관 동의 (`allow == "true"`)
//! 2. 비밀번호 확인 일치 (`password == password2`)
//! 3. 인증번호 존재 및 일치 (저장소 조회 결과로 [`check_sms_code`])

use crate::errors::RegistrationError;

/// 약관 동의를 나타내는 유일한 값
pub const AGREEMENT_ACCEPTED: &str = "true";

/// 스키마 검증을 통과한 회원가입 입력
///
/// 한 번의 검증 과정 동안만 존재하며, 저장되지 않습니다.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub mobile: String,
    pub password: String,
    pub password2: String,
    pub sms_code: String,
    pub allow: String,
}

type FormCheck = fn(&RegistrationForm) -> Result<(), RegistrationError>;

/// 저장소 접근 없이 수행하는 검사들 (순서대로 적용)
const FORM_CHECKS: [FormCheck; 2] = [check_agreement, check_passwords_match];

pub fn check_agreement(form: &RegistrationForm) -> Result<(), RegistrationError> {
    if form.allow != AGREEMENT_ACCEPTED {
        return Err(RegistrationError::AgreementNotAccepted);
    }
    Ok(())
}

pub fn check_passwords_match(form: &RegistrationForm) -> Result<(), RegistrationError> {
    if form.password != form.password2 {
        return Err(RegistrationError::PasswordMismatch);
    }
    Ok(())
}

/// 폼 단위 검사를 순서대로 적용하고 처음 실패한 규칙을 반환합니다.
pub fn check_form(form: &RegistrationForm) -> Result<(), RegistrationError> {
    FORM_CHECKS.iter().try_for_each(|check| check(form))
}

/// 저장소에 있는 인증번호와 제출된 인증번호를 비교합니다.
pub fn check_sms_code(stored: Option<&str>, submitted: &str) -> Result<(), RegistrationError> {
    match stored {
        None => Err(RegistrationError::VerificationCodeMissing),
        Some(code) if code != submitted => Err(RegistrationError::VerificationCodeIncorrect),
        Some(_) => Ok(()),
    }
}
