use tc_dao::Db;
use tc_service::tutor::TutorService;

pub struct ApiRestCtx {
    tutor: TutorService<Db>,
}

impl ApiRestCtx {
    pub fn new(tutor: TutorService<Db>) -> Self {
        Self { tutor }
    }

    pub fn tutor(&self) -> &TutorService<Db> {
        &self.tutor
    }
}
