//! Wire shapes of the backend, which names its fields in Portuguese.
//!
//! Everything here is deserialization-only plumbing that converts into the
//! domain types; nothing outside the API client sees these structs.

use serde::Deserialize;

use backpack_core::model::{
    AttemptId, ChoiceId, CorrectedQuestion, ExamChoice, ExamQuestion, ExamResult, Lesson, LessonId,
    Page, ProgressMap, ProgressStatus, Subject, SubjectId, Summary, SummaryId, TopicId,
};

use super::{ApiError, GeneratedExam, SubjectOption};

//
// ─── PAGE ENVELOPE ─────────────────────────────────────────────────────────────
//

/// Page metadata, either nested under `page` or flattened at the top level
/// depending on the backend's serializer; both shapes occur.
#[derive(Debug, Deserialize)]
pub(crate) struct PageMetaDto {
    pub number: u32,
    pub size: u32,
    #[serde(rename = "totalElements")]
    pub total_elements: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageDto<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page: Option<PageMetaDto>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default, rename = "totalElements")]
    pub total_elements: Option<u64>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub first: Option<bool>,
    #[serde(default)]
    pub last: Option<bool>,
}

impl<T> PageDto<T> {
    /// Convert into a domain page, mapping each element.
    pub(crate) fn try_into_page<U>(
        self,
        convert: impl Fn(T) -> Result<U, ApiError>,
    ) -> Result<Page<U>, ApiError> {
        let fallback_size = self.content.len() as u32;
        let (number, size, total_elements, total_pages, first, last) = match self.page {
            Some(meta) => (
                meta.number,
                meta.size,
                meta.total_elements,
                meta.total_pages,
                meta.first,
                meta.last,
            ),
            None => (
                self.number.unwrap_or(0),
                self.size.unwrap_or(fallback_size),
                self.total_elements.unwrap_or(u64::from(fallback_size)),
                self.total_pages.unwrap_or(1),
                self.first,
                self.last,
            ),
        };

        let content = self
            .content
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<U>, ApiError>>()?;

        Ok(Page {
            content,
            number,
            size: size.max(1),
            total_elements,
            total_pages,
            first: first.unwrap_or(number == 0),
            last: last.unwrap_or(number + 1 >= total_pages.max(1)),
        })
    }
}

//
// ─── ERROR BODY ────────────────────────────────────────────────────────────────
//

/// The `{"message": ...}` body the backend attaches to most failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBodyDto {
    pub message: Option<String>,
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct SubjectProgressDto {
    pub id: u64,
    pub nome: String,
    #[serde(rename = "percentualConclusao")]
    pub percentual_conclusao: f64,
}

impl From<SubjectProgressDto> for Subject {
    fn from(dto: SubjectProgressDto) -> Self {
        Subject {
            id: SubjectId::new(dto.id),
            name: dto.nome,
            completion_percent: dto.percentual_conclusao,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubjectDto {
    pub id: u64,
    pub nome: String,
}

impl From<SubjectDto> for SubjectOption {
    fn from(dto: SubjectDto) -> Self {
        SubjectOption {
            id: SubjectId::new(dto.id),
            name: dto.nome,
        }
    }
}

/// Nested subject reference carried by lessons and summaries.
#[derive(Debug, Deserialize)]
pub(crate) struct SubjectNameDto {
    pub nome: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LessonDto {
    pub id: u64,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub link: String,
    #[serde(rename = "duracaoSegundos", default)]
    pub duracao_segundos: Option<u32>,
    #[serde(default)]
    pub materia: Option<SubjectNameDto>,
}

impl TryFrom<LessonDto> for Lesson {
    type Error = ApiError;

    fn try_from(dto: LessonDto) -> Result<Self, ApiError> {
        Lesson::new(
            LessonId::new(dto.id),
            dto.titulo,
            dto.descricao.unwrap_or_default(),
            &dto.link,
            dto.duracao_segundos.unwrap_or(0),
            dto.materia.map(|materia| materia.nome),
        )
        .map_err(|err| ApiError::Payload(err.to_string()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LessonProgressDto {
    #[serde(rename = "aulaId")]
    pub aula_id: u64,
    pub status: String,
}

pub(crate) fn lesson_progress_map(entries: Vec<LessonProgressDto>) -> ProgressMap<LessonId> {
    entries
        .into_iter()
        .map(|entry| {
            (
                LessonId::new(entry.aula_id),
                ProgressStatus::from_wire(&entry.status),
            )
        })
        .collect()
}

//
// ─── SUMMARIES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryDto {
    pub id: u64,
    pub titulo: String,
    #[serde(default)]
    pub conteudo: Option<String>,
    #[serde(default)]
    pub materia: Option<SubjectNameDto>,
}

impl From<SummaryDto> for Summary {
    fn from(dto: SummaryDto) -> Self {
        Summary {
            id: SummaryId::new(dto.id),
            title: dto.titulo,
            content: dto.conteudo.unwrap_or_default(),
            subject_name: dto.materia.map(|materia| materia.nome),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryProgressDto {
    #[serde(rename = "resumoId")]
    pub resumo_id: u64,
    pub status: String,
}

pub(crate) fn summary_progress_map(entries: Vec<SummaryProgressDto>) -> ProgressMap<SummaryId> {
    entries
        .into_iter()
        .map(|entry| {
            (
                SummaryId::new(entry.resumo_id),
                ProgressStatus::from_wire(&entry.status),
            )
        })
        .collect()
}

//
// ─── STATISTICS ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct LessonStatsDto {
    #[serde(rename = "aulasVistas")]
    pub aulas_vistas: u64,
    #[serde(rename = "aulasPendentes")]
    pub aulas_pendentes: u64,
    #[serde(rename = "totalAulas")]
    pub total_aulas: u64,
    #[serde(rename = "mediaAulasPorDia")]
    pub media_aulas_por_dia: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryStatsDto {
    #[serde(rename = "resumosCompletados")]
    pub resumos_completados: u64,
    #[serde(rename = "resumosPendentes")]
    pub resumos_pendentes: u64,
    #[serde(rename = "totalResumos")]
    pub total_resumos: u64,
    #[serde(rename = "mediaResumosPorDia")]
    pub media_resumos_por_dia: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatisticsDto {
    pub aulas: LessonStatsDto,
    pub resumos: SummaryStatsDto,
}

impl From<StatisticsDto> for backpack_core::model::UserStatistics {
    fn from(dto: StatisticsDto) -> Self {
        backpack_core::model::UserStatistics {
            lessons: backpack_core::model::LessonStats {
                watched: dto.aulas.aulas_vistas,
                pending: dto.aulas.aulas_pendentes,
                total: dto.aulas.total_aulas,
                per_day_avg: dto.aulas.media_aulas_por_dia,
            },
            summaries: backpack_core::model::SummaryStats {
                completed: dto.resumos.resumos_completados,
                pending: dto.resumos.resumos_pendentes,
                total: dto.resumos.total_resumos,
                per_day_avg: dto.resumos.media_resumos_por_dia,
            },
        }
    }
}

//
// ─── PRACTICE EXAMS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct ExamChoiceDto {
    pub id: u64,
    #[serde(rename = "textoAfirmativa")]
    pub texto_afirmativa: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExamQuestionDto {
    #[serde(rename = "topicoId")]
    pub topico_id: u64,
    pub titulo: String,
    pub alternativas: Vec<ExamChoiceDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeneratedExamDto {
    #[serde(rename = "tentativaId")]
    pub tentativa_id: u64,
    pub questoes: Vec<ExamQuestionDto>,
}

impl From<GeneratedExamDto> for GeneratedExam {
    fn from(dto: GeneratedExamDto) -> Self {
        GeneratedExam {
            attempt_id: AttemptId::new(dto.tentativa_id),
            questions: dto
                .questoes
                .into_iter()
                .map(|question| ExamQuestion {
                    topic_id: TopicId::new(question.topico_id),
                    title: question.titulo,
                    choices: question
                        .alternativas
                        .into_iter()
                        .map(|choice| ExamChoice {
                            id: ChoiceId::new(choice.id),
                            text: choice.texto_afirmativa,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CorrectedQuestionDto {
    #[serde(rename = "topicoId")]
    pub topico_id: u64,
    #[serde(rename = "tituloTopico")]
    pub titulo_topico: String,
    #[serde(rename = "alternativaEscolhidaId")]
    pub alternativa_escolhida_id: u64,
    #[serde(rename = "textoAlternativaEscolhida")]
    pub texto_alternativa_escolhida: String,
    #[serde(rename = "alternativaCorretaId")]
    pub alternativa_correta_id: u64,
    #[serde(rename = "textoAlternativaCorreta")]
    pub texto_alternativa_correta: String,
    pub acertou: bool,
    #[serde(default)]
    pub justificativa: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExamResultDto {
    #[serde(rename = "tentativaId")]
    pub tentativa_id: u64,
    #[serde(rename = "pontuacaoFinal")]
    pub pontuacao_final: f64,
    pub acertos: u32,
    #[serde(rename = "totalQuestoes")]
    pub total_questoes: u32,
    #[serde(rename = "questoesCorrigidas")]
    pub questoes_corrigidas: Vec<CorrectedQuestionDto>,
}

impl From<ExamResultDto> for ExamResult {
    fn from(dto: ExamResultDto) -> Self {
        ExamResult {
            attempt_id: AttemptId::new(dto.tentativa_id),
            final_score: dto.pontuacao_final,
            correct: dto.acertos,
            total: dto.total_questoes,
            corrected: dto
                .questoes_corrigidas
                .into_iter()
                .map(|question| CorrectedQuestion {
                    topic_id: TopicId::new(question.topico_id),
                    topic_title: question.titulo_topico,
                    chosen_id: ChoiceId::new(question.alternativa_escolhida_id),
                    chosen_text: question.texto_alternativa_escolhida,
                    correct_id: ChoiceId::new(question.alternativa_correta_id),
                    correct_text: question.texto_alternativa_correta,
                    is_correct: question.acertou,
                    rationale: question.justificativa,
                })
                .collect(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_page_envelope_parses() {
        let json = r#"{
            "content": [{"id": 1, "nome": "Math"}],
            "page": {"number": 0, "size": 10, "totalElements": 1, "totalPages": 1}
        }"#;
        let dto: PageDto<SubjectDto> = serde_json::from_str(json).unwrap();
        let page = dto
            .try_into_page(|subject| Ok(SubjectOption::from(subject)))
            .unwrap();

        assert_eq!(page.content[0].name, "Math");
        assert!(page.first && page.last);
    }

    #[test]
    fn flattened_page_envelope_parses() {
        let json = r#"{
            "content": [{"id": 2, "nome": "History"}],
            "number": 1, "size": 1, "totalElements": 3, "totalPages": 3,
            "first": false, "last": false
        }"#;
        let dto: PageDto<SubjectDto> = serde_json::from_str(json).unwrap();
        let page = dto
            .try_into_page(|subject| Ok(SubjectOption::from(subject)))
            .unwrap();

        assert_eq!(page.number, 1);
        assert!(!page.first && !page.last);
    }

    #[test]
    fn subject_progress_keeps_fractional_percent() {
        let json = r#"[{"id": 1, "nome": "Math", "percentualConclusao": 42.6}]"#;
        let dtos: Vec<SubjectProgressDto> = serde_json::from_str(json).unwrap();
        let subject = Subject::from(dtos.into_iter().next().unwrap());

        assert_eq!(subject.completion_percent, 42.6);
        assert_eq!(subject.completion_whole_percent(), 42);
    }

    #[test]
    fn lesson_with_bad_link_is_a_payload_error() {
        let dto = LessonDto {
            id: 1,
            titulo: "L".to_string(),
            descricao: None,
            link: "not a url".to_string(),
            duracao_segundos: Some(60),
            materia: None,
        };
        assert!(matches!(Lesson::try_from(dto), Err(ApiError::Payload(_))));
    }

    #[test]
    fn progress_entries_collect_into_a_map() {
        let json = r#"[{"aulaId": 4, "status": "CONCLUIDO"}, {"aulaId": 9, "status": "EM_ANDAMENTO"}]"#;
        let entries: Vec<LessonProgressDto> = serde_json::from_str(json).unwrap();
        let map = lesson_progress_map(entries);

        assert_eq!(map[&LessonId::new(4)], ProgressStatus::Completed);
        assert_eq!(map[&LessonId::new(9)], ProgressStatus::InProgress);
    }

    #[test]
    fn exam_result_converts_with_rationale_optional() {
        let json = r#"{
            "tentativaId": 5, "pontuacaoFinal": 8.0, "acertos": 8, "totalQuestoes": 10,
            "questoesCorrigidas": [{
                "topicoId": 1, "tituloTopico": "T",
                "alternativaEscolhidaId": 2, "textoAlternativaEscolhida": "a",
                "alternativaCorretaId": 3, "textoAlternativaCorreta": "b",
                "acertou": false
            }]
        }"#;
        let dto: ExamResultDto = serde_json::from_str(json).unwrap();
        let result = ExamResult::from(dto);

        assert_eq!(result.attempt_id, AttemptId::new(5));
        assert_eq!(result.corrected[0].rationale, None);
        assert!(!result.corrected[0].is_correct);
    }
}
