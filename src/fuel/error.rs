use thiserror::Error;

/// 연료 경제성 계산 중 발생 가능한 오류.
///
/// 모든 오류는 처음 위반된 전제조건에서 즉시 반환되며, 엔진은 NaN/무한대
/// 결과를 만들어 내는 대신 반드시 이 오류로 실패한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelCalcError {
    /// 선박 사양(출력, 운항 시간)이 허용 범위를 벗어난 경우
    #[error("선박 입력 오류: {0}")]
    InvalidInput(&'static str),
    /// 연료 물성(발열량, 변환 효율 등)이 잘못된 경우
    #[error("연료 데이터 오류: {0}")]
    InvalidFuelData(&'static str),
    /// 할인율/상각 기간 등 규제 파라미터가 퇴화된 경우
    #[error("정책 파라미터 오류: {0}")]
    InvalidPolicy(&'static str),
}

/// 엔진 전용 결과 별칭.
pub type FuelCalcResult<T> = Result<T, FuelCalcError>;
